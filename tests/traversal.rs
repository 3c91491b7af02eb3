use magical::{Error, MagicalContainer, MagicalIter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_container(rng: &mut StdRng, max_len: usize) -> (MagicalContainer, Vec<i32>) {
    let mut container = MagicalContainer::new();
    let mut added = vec![];
    for _ in 0..rng.gen_range(0..=max_len) {
        let element = rng.gen_range(-50..=50);
        container.add_element(element);
        added.push(element);
    }
    (container, added)
}

#[test]
fn random_adds_stay_sorted_and_unique() {
    init_log();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let (container, mut added) = random_container(&mut rng, 40);
        added.sort_unstable();
        added.dedup();
        assert_eq!(added.as_slice(), container.as_slice());
        for i in 1..container.size() {
            assert!(container.element_at(i - 1).unwrap() < container.element_at(i).unwrap());
        }
    }
}

#[test]
fn random_removals_are_atomic() {
    init_log();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let (mut container, _) = random_container(&mut rng, 30);
        for _ in 0..20 {
            let element = rng.gen_range(-50..=50);
            let before = container.clone();
            match container.remove_element(element) {
                Ok(()) => {
                    assert!(before.contains(element));
                    assert!(!container.contains(element));
                    assert_eq!(before.size() - 1, container.size());
                }
                Err(err) => {
                    assert_eq!(Error::NotFound(element), err);
                    assert_eq!(before, container);
                }
            }
        }
    }
}

#[test]
fn random_side_cross_visits_every_element_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let (container, _) = random_container(&mut rng, 25);
        let elements = container.as_slice();
        let crossed = container.side_cross().walk().collect::<Vec<_>>();
        assert_eq!(elements.len(), crossed.len());

        let mut expected = vec![];
        let (mut lo, mut hi) = (0, elements.len());
        while lo < hi {
            expected.push(elements[lo]);
            lo += 1;
            if lo < hi {
                hi -= 1;
                expected.push(elements[hi]);
            }
        }
        assert_eq!(expected, crossed);
    }
}

#[test]
fn random_prime_matches_filter() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let (container, _) = random_container(&mut rng, 40);
        let expected = container
            .as_slice()
            .iter()
            .copied()
            .filter(|&element| magical::prime::is_prime(element))
            .collect::<Vec<_>>();
        assert_eq!(expected, container.prime().walk().collect::<Vec<_>>());
    }
}

#[test]
fn views_reflect_container_after_mutation() {
    let mut container = MagicalContainer::new();
    container.add_element(6);
    container.add_element(3);
    container.add_element(13);
    assert_eq!(vec![3, 6, 13], container.ascending().walk().collect::<Vec<_>>());

    container.remove_element(6).unwrap();
    container.add_element(2);
    assert_eq!(vec![2, 3, 13], container.ascending().walk().collect::<Vec<_>>());
    assert_eq!(vec![2, 13, 3], container.side_cross().walk().collect::<Vec<_>>());
    assert_eq!(vec![2, 3, 13], container.prime().walk().collect::<Vec<_>>());
}

#[test]
fn iterators_over_equal_containers_remain_distinct() {
    let a = MagicalContainer::from(vec![1, 2, 3]);
    let b = a.clone();
    assert_eq!(a, b);

    let mut on_a = a.ascending();
    assert!(on_a != b.ascending());
    assert_eq!(Err(Error::IncompatibleContainer), on_a.assign(&b.ascending().end()));
    assert_eq!(Ok(1), on_a.get());
}
