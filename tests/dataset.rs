use classic_sorts::dataset::{self, seeded_rng, DEFAULT_SEED};
use classic_sorts::{Algorithm, Distribution};

const SIZE: usize = 1_000;

fn generate(distribution: Distribution, size: usize) -> Vec<i64> {
    distribution.generate(size, &mut seeded_rng(DEFAULT_SEED))
}

#[test]
fn lengths() {
    for distribution in Distribution::ALL {
        for size in [0, 1, 2, 99, 100, SIZE] {
            assert_eq!(generate(distribution, size).len(), size, "{distribution}");
        }
    }
}

#[test]
fn same_seed_same_data() {
    for distribution in Distribution::ALL {
        assert_eq!(generate(distribution, SIZE), generate(distribution, SIZE));
    }

    let a = Distribution::Random.generate(SIZE, &mut seeded_rng(1));
    let b = Distribution::Random.generate(SIZE, &mut seeded_rng(2));
    assert_ne!(a, b);
}

#[test]
fn shapes() {
    let sorted = generate(Distribution::Sorted, SIZE);
    assert!(sorted.iter().copied().eq(0..SIZE as i64));

    let reverse = generate(Distribution::Reverse, SIZE);
    assert!(reverse.iter().copied().eq((1..=SIZE as i64).rev()));

    let random = generate(Distribution::Random, SIZE);
    assert!(random.iter().all(|&v| (0..=SIZE as i64).contains(&v)));

    let few_unique = generate(Distribution::FewUnique, SIZE);
    assert!(few_unique.iter().all(|&v| (0..10).contains(&v)));

    let identical = generate(Distribution::Identical, SIZE);
    assert!(identical.windows(2).all(|w| w[0] == w[1]));
    assert!((0..=SIZE as i64).contains(&identical[0]));
}

#[test]
fn nearly_sorted_is_a_light_shuffle() {
    let nearly_sorted = generate(Distribution::NearlySorted, SIZE);

    // Every swap displaces at most two elements.
    let displaced = nearly_sorted
        .iter()
        .enumerate()
        .filter(|&(i, &v)| v != i as i64)
        .count();
    assert!(displaced <= 2 * (SIZE / 100));

    let mut restored = nearly_sorted.clone();
    restored.sort_unstable();
    assert!(restored.iter().copied().eq(0..SIZE as i64));
}

#[test]
fn every_algorithm_sorts_every_distribution() {
    for distribution in Distribution::ALL {
        let input = generate(distribution, SIZE);
        let mut expected = input.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let mut v = input.clone();
            algorithm.sort(&mut v);
            assert_eq!(v, expected, "{algorithm} on {distribution}");
        }
    }
}

#[test]
fn distribution_names() {
    for distribution in Distribution::ALL {
        assert_eq!(distribution.name().parse::<Distribution>(), Ok(distribution));
    }

    assert_eq!("nearly-sorted".parse::<Distribution>(), Ok(Distribution::NearlySorted));
    assert!("zigzag".parse::<Distribution>().is_err());
}

#[test]
fn suite_draws_from_one_generator() {
    let sizes = [0, 10, SIZE];
    let entries = dataset::suite(&sizes, DEFAULT_SEED).collect::<Vec<_>>();
    assert_eq!(entries.len(), sizes.len() * Distribution::ALL.len());

    let mut rng = seeded_rng(DEFAULT_SEED);
    let mut entries = entries.into_iter();
    for size in sizes {
        for distribution in Distribution::ALL {
            let expected = distribution.generate(size, &mut rng);
            assert_eq!(entries.next(), Some((size, distribution, expected)));
        }
    }
}

#[test]
fn suite_differs_from_fresh_generators() {
    // Only the distributions that draw before `nearly_sorted` agree with a freshly seeded one.
    let nearly_sorted = dataset::suite(&[SIZE], DEFAULT_SEED)
        .find(|(_, distribution, _)| *distribution == Distribution::NearlySorted)
        .map(|(_, _, values)| values);

    assert_eq!(nearly_sorted.as_ref().map(Vec::len), Some(SIZE));
    assert_ne!(nearly_sorted, Some(generate(Distribution::NearlySorted, SIZE)));
}
