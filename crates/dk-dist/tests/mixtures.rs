//! Tests of the hyperexponential family through the public factory,
//! exercising the indexed-parameter collector: implicit and explicit
//! indices, gap and duplicate detection, and weight normalization.
//!
//! Run: `cargo test -p dk-dist --test mixtures`

use dk_dist::{make, Distribution, ParamEntry};

fn bag(pairs: &[(&str, f64)]) -> Vec<ParamEntry> {
    pairs.iter().map(|&(k, v)| ParamEntry::new(k, v)).collect()
}

fn hyper(pairs: &[(&str, f64)]) -> Distribution {
    make("hyperexponential", &bag(pairs)).expect("construction failed")
}

#[test]
fn test_explicit_indices() {
    let d = hyper(&[("rate0", 1.0), ("rate1", 3.0), ("prob0", 0.25), ("prob1", 0.75)]);
    // f(0) = Σ wᵢ λᵢ.
    assert!((d.pdf(0.0) - (0.25 * 1.0 + 0.75 * 3.0)).abs() < 1e-12);
}

#[test]
fn test_explicit_indices_out_of_order() {
    let a = hyper(&[("rate1", 3.0), ("rate0", 1.0)]);
    let b = hyper(&[("rate0", 1.0), ("rate1", 3.0)]);
    for x in [0.0, 0.5, 2.0] {
        assert_eq!(a.pdf(x), b.pdf(x));
    }
}

#[test]
fn test_implicit_sequence() {
    // Unindexed repeats of the same role key fill slots in caller order.
    let implicit = hyper(&[("rate", 1.0), ("rate", 3.0)]);
    let explicit = hyper(&[("rate0", 1.0), ("rate1", 3.0)]);
    for x in [0.0, 0.7, 4.0] {
        assert_eq!(implicit.pdf(x), explicit.pdf(x));
    }
}

#[test]
fn test_separator_and_alias_spellings() {
    let d = hyper(&[
        ("lambda_0", 1.0),
        ("Lambda_1", 3.0),
        ("weight-0", 1.0),
        ("W 1", 3.0),
    ]);
    // Weights normalize to 0.25/0.75.
    assert!((d.pdf(0.0) - (0.25 * 1.0 + 0.75 * 3.0)).abs() < 1e-12);
}

#[test]
fn test_missing_rates_is_an_error() {
    assert!(make("hyperexponential", &bag(&[("prob0", 1.0)])).is_err());
    assert!(make("hyperexponential", &bag(&[])).is_err());
}

#[test]
fn test_index_gap_detected() {
    let err = make("hyperexponential", &bag(&[("rate0", 1.0), ("rate2", 3.0)])).unwrap_err();
    assert!(err.to_string().contains("rate"), "unhelpful error: {err}");
}

#[test]
fn test_duplicate_index_detected() {
    assert!(make("hyperexponential", &bag(&[("rate0", 1.0), ("lambda0", 2.0)])).is_err());
}

#[test]
fn test_weight_count_mismatch_detected() {
    assert!(make(
        "hyperexponential",
        &bag(&[("rate0", 1.0), ("rate1", 2.0), ("prob0", 0.5)])
    )
    .is_err());
}

#[test]
fn test_equal_weights_by_default() {
    let d = hyper(&[("rate0", 2.0), ("rate1", 2.0)]);
    // Equal weights over equal rates collapse to a single exponential.
    let e = make("exponential", &bag(&[("rate", 2.0)])).unwrap();
    for x in [0.1, 1.0, 3.0] {
        assert!((d.pdf(x) - e.pdf(x)).abs() < 1e-12);
        assert!((d.cdf(x) - e.cdf(x)).abs() < 1e-12);
    }
    assert_eq!(d.mean(), e.mean());
}

#[test]
fn test_mixture_moments() {
    let d = hyper(&[("rate0", 1.0), ("rate1", 2.0), ("prob0", 0.5), ("prob1", 0.5)]);
    // E[X] = Σ wᵢ/λᵢ, E[X²] = 2 Σ wᵢ/λᵢ².
    assert!((d.mean().unwrap() - 0.75).abs() < 1e-12);
    let ex2 = 2.0 * (0.5 / 1.0 + 0.5 / 4.0);
    assert!((d.variance().unwrap() - (ex2 - 0.75 * 0.75)).abs() < 1e-12);
    // Mixtures of decreasing densities peak at the origin.
    assert_eq!(d.mode(), Some(0.0));
    assert_eq!(d.entropy(), None);
}
