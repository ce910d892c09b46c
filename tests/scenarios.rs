use classic_sorts::Algorithm;
use rand::prelude::*;
use sort_test_tools::patterns;
use sort_test_tools::tests::{is_stably_sorted, with_extra};

fn sorted_with(algorithm: Algorithm, input: &[i64]) -> Vec<i64> {
    let mut v = input.to_vec();
    algorithm.sort(&mut v);
    v
}

fn assert_sorted_permutation(input: &[i64], output: &[i64]) {
    assert!(output.windows(2).all(|w| w[0] <= w[1]), "not sorted: {output:?}");

    let mut expected = input.to_vec();
    expected.sort_unstable();
    let mut got = output.to_vec();
    got.sort_unstable();
    assert_eq!(expected, got, "not a permutation of the input");
}

#[test]
fn mixed_input() {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            sorted_with(algorithm, &[5, 3, 8, 1, 9, 2]),
            [1, 2, 3, 5, 8, 9],
            "{algorithm}"
        );
    }
}

#[test]
fn empty_and_single() {
    for algorithm in Algorithm::ALL {
        assert_eq!(sorted_with(algorithm, &[]), Vec::<i64>::new(), "{algorithm}");
        assert_eq!(sorted_with(algorithm, &[7]), [7], "{algorithm}");
    }
}

#[test]
fn reverse_sorted() {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            sorted_with(algorithm, &[9, 8, 7, 6, 5, 4, 3, 2, 1]),
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            "{algorithm}"
        );
    }
}

#[test]
fn tagged_duplicates() {
    // (2,a) (2,b) (1,c) (1,d), the tag is the original position.
    let input = with_extra(&[2, 2, 1, 1]);

    for algorithm in Algorithm::ALL {
        let mut v = input.clone();
        algorithm.sort(&mut v);

        let keys = v.iter().map(|val| val.key).collect::<Vec<_>>();
        assert_eq!(keys, [1, 1, 2, 2], "{algorithm}");

        if algorithm.is_stable() {
            let tags = v.iter().map(|val| val.extra).collect::<Vec<_>>();
            assert_eq!(tags, [2, 3, 0, 1], "{algorithm}");
            assert!(is_stably_sorted(&v));
        }
    }
}

#[test]
fn stability_classes() {
    let stable = Algorithm::ALL
        .into_iter()
        .filter(|algorithm| algorithm.is_stable())
        .collect::<Vec<_>>();

    assert_eq!(
        stable,
        [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge]
    );
}

#[test]
fn selection_sort_reorders_equal_elements() {
    // The first 2 is swapped behind the second one when 1 moves to the front.
    let mut v = with_extra(&[2, 2, 1]);
    Algorithm::Selection.sort(&mut v);

    let tags = v.iter().map(|val| val.extra).collect::<Vec<_>>();
    assert_eq!(tags, [2, 1, 0]);
}

#[test]
fn idempotent() {
    let input = [4, -1, 4, 0, 12, -7, 3, 3, 0];

    for algorithm in Algorithm::ALL {
        let once = sorted_with(algorithm, &input);
        let twice = sorted_with(algorithm, &once);
        assert_eq!(once, twice, "{algorithm}");
    }
}

#[test]
fn random_inputs_agree() {
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());

    for _ in 0..1_000 {
        let len = rng.gen_range(0..=500);
        let input = (0..len)
            .map(|_| rng.gen_range(-1_000_000..=1_000_000))
            .collect::<Vec<i64>>();

        let reference = sorted_with(Algorithm::ALL[0], &input);
        assert_sorted_permutation(&input, &reference);

        for algorithm in &Algorithm::ALL[1..] {
            let output = sorted_with(*algorithm, &input);
            assert_sorted_permutation(&input, &output);
            assert_eq!(reference, output, "{algorithm} disagrees with {}", Algorithm::ALL[0]);
        }
    }
}

#[test]
fn algorithm_names() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }

    assert_eq!("merge_sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
    assert_eq!("Quick-Sort".parse::<Algorithm>(), Ok(Algorithm::Quick));
    assert_eq!(" BUBBLE ".parse::<Algorithm>(), Ok(Algorithm::Bubble));

    let err = "heap".parse::<Algorithm>().unwrap_err();
    assert!(err.to_string().contains("`heap`"));
}
