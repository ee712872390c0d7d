//! End-to-end tests of the distribution facade: name resolution, alias
//! handling, the sentinel conventions of the operation table, and spot
//! checks of moments against closed forms.
//!
//! Run: `cargo test -p dk-dist --test facade`

use dk_dist::{make, Distribution, Op, ParamEntry};

fn bag(pairs: &[(&str, f64)]) -> Vec<ParamEntry> {
    pairs.iter().map(|&(k, v)| ParamEntry::new(k, v)).collect()
}

fn dist(name: &str, pairs: &[(&str, f64)]) -> Distribution {
    make(name, &bag(pairs)).unwrap_or_else(|e| panic!("make({name}) failed: {e}"))
}

// ── Name resolution ──────────────────────────────────────────────────────

#[test]
fn test_name_spellings_and_suffix() {
    for name in [
        "normal",
        "Gaussian",
        "NORMAL",
        "normal_distribution",
        "Chi-Squared_Distribution",
        "chi2",
        "extreme value",
        "gumbel",
        "students_t",
    ] {
        assert!(
            make(name, &bag(&[("df", 4.0)])).is_ok(),
            "spelling {name:?} did not resolve"
        );
    }
}

#[test]
fn test_unknown_family_is_an_error() {
    assert!(make("zipf", &[]).is_err());
    assert!(make("", &[]).is_err());
}

#[test]
fn test_family_reports_canonical_name() {
    assert_eq!(dist("Gaussian", &[]).family(), "normal");
    assert_eq!(dist("gumbel", &[]).family(), "extreme_value");
}

// ── Alias-tolerant parameters ────────────────────────────────────────────

#[test]
fn test_normal_alias_equivalence() {
    let a = dist("normal", &[("mu", 1.5), ("sigma", 2.0)]);
    let b = dist("normal", &[("location", 1.5), ("sd", 2.0)]);
    let c = dist("normal", &[("mean", 1.5), ("standard_deviation", 2.0)]);
    for x in [-3.0, 0.0, 1.5, 4.2] {
        assert_eq!(a.pdf(x), b.pdf(x));
        assert_eq!(a.pdf(x), c.pdf(x));
        assert_eq!(a.cdf(x), c.cdf(x));
    }
}

#[test]
fn test_defaults_and_unknown_keys() {
    // Unrecognized keys are ignored; missing optionals take defaults.
    let d = dist("normal", &[("comment", 99.0)]);
    assert!((d.cdf(0.0) - 0.5).abs() < 1e-12);
    assert_eq!(d.mean(), Some(0.0));
}

#[test]
fn test_missing_required_parameter() {
    let err = make("gamma", &bag(&[("theta", 2.0)])).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("gamma") && msg.contains("shape"), "unhelpful error: {msg}");
}

#[test]
fn test_invalid_parameter_rejected() {
    assert!(make("weibull", &bag(&[("shape", -1.0)])).is_err());
    assert!(make("normal", &bag(&[("sigma", 0.0)])).is_err());
    assert!(make("normal", &bag(&[("mu", f64::NAN)])).is_err());
}

// ── Sentinel conventions ─────────────────────────────────────────────────

#[test]
fn test_non_finite_argument_is_nan() {
    let d = dist("normal", &[]);
    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(d.pdf(x).is_nan());
        assert!(d.ln_pdf(x).is_nan());
        assert!(d.cdf(x).is_nan());
        assert!(d.sf(x).is_nan());
    }
}

#[test]
fn test_quantile_probability_guards() {
    let d = dist("normal", &[]);
    assert!(d.quantile(-0.5).is_nan());
    assert!(d.quantile(1.5).is_nan());
    assert!(d.quantile(f64::NAN).is_nan());
    assert_eq!(d.quantile(0.0), f64::NEG_INFINITY);
    assert_eq!(d.quantile(1.0), f64::INFINITY);
    assert_eq!(d.quantile_complement(0.0), f64::INFINITY);
    assert_eq!(d.quantile_complement(1.0), f64::NEG_INFINITY);

    let bounded = dist("uniform", &[("lower", 2.0), ("upper", 5.0)]);
    assert_eq!(bounded.quantile(0.0), 2.0);
    assert_eq!(bounded.quantile(1.0), 5.0);
}

#[test]
fn test_hazard_guards() {
    let u = dist("uniform", &[]);
    // Positive density over zero survival would overflow the ratio.
    assert!(u.hazard(1.0).is_nan());
    // Outside the support the density is a domain error, and so is the
    // hazard.
    assert!(u.hazard(2.0).is_nan());
    // Interior point: pdf/sf = 1 / (1 - x).
    assert!((u.hazard(0.25) - 1.0 / 0.75).abs() < 1e-12);

    // An underflowed density inside the support is exactly zero hazard,
    // never 0/0.
    let n = dist("normal", &[]);
    assert_eq!(n.pdf(-400.0), 0.0);
    assert_eq!(n.hazard(-400.0), 0.0);
}

#[test]
fn test_out_of_support_density_is_nan() {
    // Continuous and discrete families agree: density outside the
    // support is a domain error, while cdf/sf saturate.
    let g = dist("gamma", &[("shape", 2.0)]);
    assert!(g.pdf(-1.0).is_nan());
    assert!(g.ln_pdf(-1.0).is_nan());
    assert_eq!(g.cdf(-1.0), 0.0);
    assert_eq!(g.sf(-1.0), 1.0);

    assert!(dist("rayleigh", &[]).pdf(-0.5).is_nan());
    assert!(dist("uniform", &[]).pdf(2.0).is_nan());
    assert!(dist("binomial", &[("n", 10.0), ("p", 0.4)]).pdf(-1.0).is_nan());
}

#[test]
fn test_exponential_hazard_and_chf() {
    let d = dist("exponential", &[("rate", 2.0)]);
    for x in [0.1, 1.0, 5.0] {
        assert!((d.hazard(x) - 2.0).abs() < 1e-9, "constant hazard at {x}");
        assert!((d.chf(x) - 2.0 * x).abs() < 1e-9, "linear chf at {x}");
    }
}

// ── Operation-table identities across families ───────────────────────────

#[test]
fn test_sf_complements_cdf() {
    let cases: [(Distribution, &[f64]); 8] = [
        (dist("normal", &[]), &[-2.0, 0.0, 1.3]),
        (dist("gamma", &[("shape", 2.0), ("scale", 3.0)]), &[0.5, 4.0, 20.0]),
        (dist("beta", &[("alpha", 2.0), ("beta", 3.0)]), &[0.1, 0.5, 0.9]),
        (dist("logistic", &[]), &[-4.0, 0.0, 2.5]),
        (dist("rayleigh", &[]), &[0.3, 1.0, 3.0]),
        (dist("extreme_value", &[]), &[-1.0, 0.0, 2.0]),
        (dist("laplace", &[]), &[-2.0, 0.0, 2.0]),
        (dist("cauchy", &[]), &[-10.0, 0.0, 10.0]),
    ];
    for (d, xs) in &cases {
        for &x in *xs {
            let gap = (d.sf(x) - (1.0 - d.cdf(x))).abs();
            assert!(gap < 1e-10, "{}: sf+cdf != 1 at {x} (gap {gap})", d.family());
        }
    }
}

#[test]
fn test_quantile_round_trips() {
    let cases = [
        dist("normal", &[("mu", -1.0), ("sigma", 0.5)]),
        dist("gamma", &[("shape", 2.0), ("scale", 3.0)]),
        dist("beta", &[("alpha", 2.0), ("beta", 5.0)]),
        dist("student_t", &[("df", 6.0)]),
        dist("weibull", &[("shape", 1.5), ("scale", 2.0)]),
        dist("logistic", &[("scale", 2.0)]),
        dist("rayleigh", &[("sigma", 1.5)]),
        dist("arcsine", &[]),
        dist("extreme_value", &[("location", 1.0)]),
        dist("pareto", &[("shape", 2.5)]),
        dist("lognormal", &[]),
        dist("cauchy", &[]),
        dist("hyperexponential", &[("rate0", 0.5), ("rate1", 4.0)]),
        dist("non_central_chi_squared", &[("df", 3.0), ("lambda", 2.0)]),
    ];
    for d in &cases {
        for p in [0.05, 0.5, 0.95] {
            let x = d.quantile(p);
            assert!(x.is_finite(), "{}: quantile({p}) not finite", d.family());
            let back = d.cdf(x);
            assert!(
                (back - p).abs() < 1e-6,
                "{}: cdf(quantile({p})) = {back}",
                d.family()
            );
            let xc = d.quantile_complement(1.0 - p);
            assert!(
                (xc - x).abs() < 2e-5 * (1.0 + x.abs()),
                "{}: complement quantile disagrees at {p}",
                d.family()
            );
        }
    }
}

#[test]
fn test_kurtosis_is_excess_plus_three() {
    for d in [
        dist("normal", &[]),
        dist("gamma", &[("shape", 4.0)]),
        dist("logistic", &[]),
        dist("binomial", &[("n", 12.0), ("p", 0.4)]),
    ] {
        let kx = d.kurtosis_excess().unwrap();
        assert!((d.kurtosis().unwrap() - (kx + 3.0)).abs() < 1e-12);
    }
}

#[test]
fn test_std_dev_is_sqrt_variance() {
    let d = dist("gamma", &[("shape", 2.0), ("scale", 3.0)]);
    assert!((d.std_dev().unwrap() - d.variance().unwrap().sqrt()).abs() < 1e-12);
}

// ── Moment spot checks ───────────────────────────────────────────────────

#[test]
fn test_gamma_moments() {
    let d = dist("gamma", &[("shape", 2.0), ("scale", 3.0)]);
    assert!((d.mean().unwrap() - 6.0).abs() < 1e-10);
    assert!((d.variance().unwrap() - 18.0).abs() < 1e-10);
    assert!((d.skewness().unwrap() - std::f64::consts::SQRT_2).abs() < 1e-10);
    assert!((d.kurtosis_excess().unwrap() - 3.0).abs() < 1e-10);
    assert_eq!(d.mode(), Some(3.0));
    assert_eq!(d.range(), (0.0, f64::INFINITY));
}

#[test]
fn test_binomial_moments_and_mode() {
    let d = dist("binomial", &[("trials", 10.0), ("success_fraction", 0.3)]);
    assert!((d.mean().unwrap() - 3.0).abs() < 1e-10);
    assert!((d.variance().unwrap() - 2.1).abs() < 1e-10);
    assert_eq!(d.mode(), Some(3.0));
    assert_eq!(d.range(), (0.0, 10.0));
    assert!(d.is_discrete());
}

#[test]
fn test_lognormal_median_and_mode() {
    let d = dist("lognormal", &[("mu", 0.5), ("sigma", 0.75)]);
    assert!((d.median().unwrap() - 0.5f64.exp()).abs() < 1e-10);
    assert!((d.mode().unwrap() - (0.5_f64 - 0.75 * 0.75).exp()).abs() < 1e-10);
}

#[test]
fn test_non_central_chi_squared_moments() {
    // ncp alias for the non-centrality.
    let d = dist("non_central_chi_squared", &[("df", 3.0), ("ncp", 2.0)]);
    assert_eq!(d.mean(), Some(5.0));
    assert_eq!(d.variance(), Some(14.0));
}

// ── Null capability slots ────────────────────────────────────────────────

#[test]
fn test_cauchy_has_no_moments() {
    let d = dist("cauchy", &[("location", 2.0)]);
    assert_eq!(d.mean(), None);
    assert_eq!(d.variance(), None);
    assert_eq!(d.std_dev(), None);
    assert_eq!(d.skewness(), None);
    assert_eq!(d.kurtosis(), None);
    assert_eq!(d.kurtosis_excess(), None);
    assert_eq!(d.mode(), Some(2.0));
    assert_eq!(d.median(), Some(2.0));
    assert!(!d.supports(Op::Mean));
    assert!(!d.supports(Op::Variance));
    assert!(d.supports(Op::Mode));
    assert!(d.supports(Op::Pdf));
    assert!(d.supports(Op::Quantile));
}

#[test]
fn test_student_t_kurtosis_requires_heavy_df() {
    assert_eq!(dist("student_t", &[("df", 3.0)]).kurtosis_excess(), None);
    let d = dist("student_t", &[("df", 10.0)]);
    assert!((d.kurtosis_excess().unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_landau_has_no_mean() {
    let d = dist("landau", &[]);
    assert_eq!(d.mean(), None);
    assert_eq!(d.variance(), None);
    assert!(!d.supports(Op::Mean));
    // Point evaluations still answer.
    assert!(d.pdf(0.0) > 0.0);
}

#[test]
fn test_holtsmark_symmetry() {
    let d = dist("holtsmark", &[]);
    assert_eq!(d.mean(), Some(0.0));
    for x in [0.5, 1.0, 2.0] {
        let gap = (d.pdf(x) - d.pdf(-x)).abs();
        assert!(gap < 1e-8, "asymmetric at {x} (gap {gap})");
    }
    assert!((d.median().unwrap() - 0.0).abs() < 1e-9);
}

// ── Discrete semantics ───────────────────────────────────────────────────

#[test]
fn test_discrete_pdf_domain() {
    let d = dist("binomial", &[("n", 10.0), ("p", 0.4)]);
    assert!(d.pdf(2.5).is_nan());
    assert!(d.pdf(-1.0).is_nan());
    assert!(d.pdf(11.0).is_nan());
    assert!(d.pdf(4.0) > 0.0);
    // The cdf is a step function evaluated at the floor.
    assert_eq!(d.cdf(2.5), d.cdf(2.0));
    assert_eq!(d.sf(2.5), d.sf(2.0));
}

#[test]
fn test_poisson_quantile_is_minimal() {
    let d = dist("poisson", &[("lambda", 4.2)]);
    for p in [0.01, 0.3, 0.5, 0.9, 0.999] {
        let k = d.quantile(p);
        assert_eq!(k.fract(), 0.0);
        assert!(d.cdf(k) >= p);
        if k > 0.0 {
            assert!(d.cdf(k - 1.0) < p, "quantile not minimal at p={p}");
        }
    }
}

#[test]
fn test_negative_binomial_moments() {
    let d = dist("negative_binomial", &[("r", 4.0), ("p", 0.5)]);
    assert!(d.is_discrete());
    assert!((d.mean().unwrap() - 4.0).abs() < 1e-10);
    assert!((d.variance().unwrap() - 8.0).abs() < 1e-10);
    assert!((d.pdf(0.0) - 0.0625).abs() < 1e-12);
    assert!(d.pdf(2.5).is_nan());
}

#[test]
fn test_geometric_counts_trials() {
    let d = dist("geometric", &[("p", 0.25)]);
    assert_eq!(d.range(), (1.0, f64::INFINITY));
    assert!((d.pdf(1.0) - 0.25).abs() < 1e-12);
    assert!((d.mean().unwrap() - 4.0).abs() < 1e-10);
}

#[test]
fn test_discrete_uniform_requires_integers() {
    assert!(make("discrete_uniform", &bag(&[("min", 0.5), ("max", 6.0)])).is_err());
    let d = dist("discrete_uniform", &[("min", 1.0), ("max", 6.0)]);
    assert!((d.pdf(3.0) - 1.0 / 6.0).abs() < 1e-12);
    assert_eq!(d.median(), Some(3.5));
}

// ── Handle lifecycle ─────────────────────────────────────────────────────

#[test]
fn test_handles_release_on_drop() {
    // Handles are independent: dropping one leaves the other usable.
    let a = dist("gamma", &[("shape", 2.0), ("scale", 3.0)]);
    let b = dist("gamma", &[("shape", 2.0), ("scale", 3.0)]);
    let at_one = a.pdf(1.0);
    drop(a);
    assert_eq!(b.pdf(1.0), at_one);

    // Construct-evaluate-drop in a tight loop; drop reclaims everything.
    for _ in 0..100 {
        let d = dist("normal", &[("mu", 1.0)]);
        assert!((d.cdf(1.0) - 0.5).abs() < 1e-12);
    }
}

// ── Capability table ─────────────────────────────────────────────────────

#[test]
fn test_op_table_is_total() {
    // Every operation answers on every family, if only with a sentinel
    // or an empty slot.
    let names: Vec<&str> = dk_dist::families().collect();
    assert!(names.len() >= 30);
    for op in Op::ALL {
        assert!(!op.name().is_empty());
    }
    let d = dist("normal", &[]);
    for op in Op::ALL {
        // supports() must answer without panicking for the whole table.
        let _ = d.supports(op);
    }
}
