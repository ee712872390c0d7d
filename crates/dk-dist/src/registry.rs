//! The distribution registry: family names → construction rules.
//!
//! Each family declares its accepted name spellings (matched after
//! normalization), resolves its parameters through the alias-tolerant
//! [`Params`] resolver (or the indexed collector for mixtures), validates
//! numeric constraints, and constructs a boxed [`Law`]. Construction is
//! all-or-nothing: unknown names, missing parameters and constraint
//! violations come back as typed errors with nothing allocated.

use dk_core::{Error, ParamEntry, Result};
use statrs::distribution::{
    Bernoulli, Beta, Binomial, Cauchy, Chi, ChiSquared, Continuous, ContinuousCDF, Discrete,
    DiscreteCDF, DiscreteUniform, Erlang, Exp, FisherSnedecor, Gamma, Geometric, Hypergeometric,
    InverseGamma, Laplace, LogNormal, Normal, Pareto, Poisson, StudentsT, Triangular, Uniform,
    Weibull,
};
use statrs::function::gamma::gamma;
use statrs::statistics::{Distribution as Moments, Max, Min};

use crate::arcsine::Arcsine;
use crate::backend::{ContinuousLaw, DiscreteLaw, Extras};
use crate::dist::Distribution;
use crate::gumbel::Gumbel;
use crate::hyperexp::HyperExponential;
use crate::indexed;
use crate::law::Law;
use crate::logistic::Logistic;
use crate::math::central_from_raw;
use crate::nc_chi_squared::NonCentralChiSquared;
use crate::neg_binomial::NegBinomial;
use crate::params::Params;
use crate::rayleigh::Rayleigh;
use crate::stable::{StableKind, StableLaw};

type Builder = fn(&Params) -> Result<Box<dyn Law>>;

struct FamilyDef {
    /// Canonical name, reported by `Distribution::family`.
    canonical: &'static str,
    /// Accepted spellings, pre-normalized (lower-case, separators
    /// stripped).
    spellings: &'static [&'static str],
    builder: Builder,
}

/// Normalize a family name: ASCII-lowercase, drop `-`/`_`/space, strip
/// one trailing `distribution`.
pub fn normalize(name: &str) -> String {
    let squeezed: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match squeezed.strip_suffix("distribution") {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => squeezed,
    }
}

/// Construct a distribution from a family name and a parameter bag.
pub fn make(name: &str, params: &[ParamEntry]) -> Result<Distribution> {
    let normalized = normalize(name);
    let def = FAMILIES
        .iter()
        .find(|d| d.spellings.contains(&normalized.as_str()))
        .ok_or_else(|| Error::UnknownFamily(name.to_string()))?;
    let p = Params::new(def.canonical, params);
    let law = (def.builder)(&p)?;
    Ok(Distribution::new(def.canonical, law))
}

/// Canonical names of every registered family.
pub fn families() -> impl Iterator<Item = &'static str> {
    FAMILIES.iter().map(|d| d.canonical)
}

fn backend_err(family: &'static str, e: impl std::fmt::Display) -> Error {
    Error::InvalidParameter { family, reason: e.to_string() }
}

fn positive(family: &'static str, name: &str, v: f64) -> Result<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(Error::InvalidParameter {
            family,
            reason: format!("{} must be finite and > 0, got {}", name, v),
        });
    }
    Ok(v)
}

fn finite(family: &'static str, name: &str, v: f64) -> Result<f64> {
    if !v.is_finite() {
        return Err(Error::InvalidParameter {
            family,
            reason: format!("{} must be finite, got {}", name, v),
        });
    }
    Ok(v)
}

fn uint(family: &'static str, name: &str, v: f64) -> Result<u64> {
    if !v.is_finite() || v < 0.0 || v.fract() != 0.0 || v > 9.0e15 {
        return Err(Error::InvalidParameter {
            family,
            reason: format!("{} must be a non-negative integer, got {}", name, v),
        });
    }
    Ok(v as u64)
}

fn int(family: &'static str, name: &str, v: f64) -> Result<i64> {
    if !v.is_finite() || v.fract() != 0.0 || v.abs() > 9.0e15 {
        return Err(Error::InvalidParameter {
            family,
            reason: format!("{} must be an integer, got {}", name, v),
        });
    }
    Ok(v as i64)
}

fn cont<D>(dist: D, extras: Extras) -> Box<dyn Law>
where
    D: Continuous<f64, f64>
        + ContinuousCDF<f64, f64>
        + Moments<f64>
        + Min<f64>
        + Max<f64>
        + Send
        + Sync
        + 'static,
{
    Box::new(ContinuousLaw::new(dist, extras))
}

fn disc_u64<D>(dist: D, extras: Extras) -> Box<dyn Law>
where
    D: Discrete<u64, f64>
        + DiscreteCDF<u64, f64>
        + Moments<f64>
        + Min<u64>
        + Max<u64>
        + Send
        + Sync
        + 'static,
{
    Box::new(DiscreteLaw::<D, u64>::new(dist, extras))
}

fn disc_i64<D>(dist: D, extras: Extras) -> Box<dyn Law>
where
    D: Discrete<i64, f64>
        + DiscreteCDF<i64, f64>
        + Moments<f64>
        + Min<i64>
        + Max<i64>
        + Send
        + Sync
        + 'static,
{
    Box::new(DiscreteLaw::<D, i64>::new(dist, extras))
}

// Alias lists. The primary alias doubles as the error-message name.
const LOCATION: &[&str] = &["location", "mean", "mu"];
const SCALE_SD: &[&str] = &["scale", "sd", "standard_deviation", "sigma"];
const PROB: &[&str] = &["success_fraction", "p", "prob", "probability"];

fn build_gamma(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let shape = positive(f, "shape", p.required("shape", &["shape", "k", "alpha"])?)?;
    let scale = positive(f, "scale", p.optional(&["scale", "theta"], 1.0))?;
    let dist = Gamma::new(shape, 1.0 / scale).map_err(|e| backend_err(f, e))?;
    let mode = (shape >= 1.0).then(|| (shape - 1.0) * scale);
    Ok(cont(dist, Extras { mode, median: None, kurtosis_excess: Some(6.0 / shape) }))
}

fn build_normal(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let location = finite(f, "location", p.optional(LOCATION, 0.0))?;
    let scale = positive(f, "scale", p.optional(SCALE_SD, 1.0))?;
    let dist = Normal::new(location, scale).map_err(|e| backend_err(f, e))?;
    Ok(cont(
        dist,
        Extras { mode: Some(location), median: Some(location), kurtosis_excess: Some(0.0) },
    ))
}

fn build_student_t(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let df = positive(f, "df", p.required("df", &["df", "degrees_of_freedom", "nu", "v"])?)?;
    let location = finite(f, "location", p.optional(&["location", "mu"], 0.0))?;
    let scale = positive(f, "scale", p.optional(&["scale", "sigma"], 1.0))?;
    let dist = StudentsT::new(location, scale, df).map_err(|e| backend_err(f, e))?;
    let kurtosis_excess = (df > 4.0).then(|| 6.0 / (df - 4.0));
    Ok(cont(dist, Extras { mode: Some(location), median: Some(location), kurtosis_excess }))
}

fn build_fisher_f(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let d1 = positive(f, "df1", p.required("df1", &["df1", "degrees_of_freedom1", "m", "n1"])?)?;
    let d2 = positive(f, "df2", p.required("df2", &["df2", "degrees_of_freedom2", "n", "n2"])?)?;
    let dist = FisherSnedecor::new(d1, d2).map_err(|e| backend_err(f, e))?;
    let mode = (d1 > 2.0).then(|| (d1 - 2.0) / d1 * d2 / (d2 + 2.0));
    let kurtosis_excess = (d2 > 8.0).then(|| {
        12.0 * (d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0) + (d2 - 4.0) * (d2 - 2.0) * (d2 - 2.0))
            / (d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0))
    });
    Ok(cont(dist, Extras { mode, median: None, kurtosis_excess }))
}

fn build_arcsine(p: &Params) -> Result<Box<dyn Law>> {
    let a = p.optional(&["min", "x_min", "a", "lower"], 0.0);
    let b = p.optional(&["max", "x_max", "b", "upper"], 1.0);
    Ok(Box::new(Arcsine::new(a, b)?))
}

fn build_beta(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let a = positive(f, "alpha", p.required("alpha", &["alpha", "a", "shape1"])?)?;
    let b = positive(f, "beta", p.required("beta", &["beta", "b", "shape2"])?)?;
    let dist = Beta::new(a, b).map_err(|e| backend_err(f, e))?;
    let mode = (a > 1.0 && b > 1.0).then(|| (a - 1.0) / (a + b - 2.0));
    let s = a + b;
    let kurtosis_excess = Some(
        6.0 * ((a - b) * (a - b) * (s + 1.0) - a * b * (s + 2.0))
            / (a * b * (s + 2.0) * (s + 3.0)),
    );
    Ok(cont(dist, Extras { mode, median: None, kurtosis_excess }))
}

fn build_chi_squared(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let df = positive(f, "df", p.required("df", &["df", "degrees_of_freedom", "k", "nu"])?)?;
    let dist = ChiSquared::new(df).map_err(|e| backend_err(f, e))?;
    Ok(cont(
        dist,
        Extras {
            mode: Some((df - 2.0).max(0.0)),
            median: None,
            kurtosis_excess: Some(12.0 / df),
        },
    ))
}

fn build_nc_chi_squared(p: &Params) -> Result<Box<dyn Law>> {
    let df = p.required("df", &["df", "degrees_of_freedom", "k", "nu"])?;
    let lambda =
        p.required("lambda", &["lambda", "ncp", "non_centrality", "noncentrality", "delta"])?;
    Ok(Box::new(NonCentralChiSquared::new(df, lambda)?))
}

fn build_poisson(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let mean = positive(f, "mean", p.required("mean", &["mean", "lambda", "rate", "mu"])?)?;
    let dist = Poisson::new(mean).map_err(|e| backend_err(f, e))?;
    Ok(disc_u64(
        dist,
        Extras {
            mode: Some(mean.floor()),
            median: None,
            kurtosis_excess: Some(1.0 / mean),
        },
    ))
}

fn build_binomial(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let n = uint(f, "trials", p.required("trials", &["trials", "n", "number_of_trials"])?)?;
    let pr = p.required("success_fraction", PROB)?;
    let dist = Binomial::new(pr, n).map_err(|e| backend_err(f, e))?;
    let q = 1.0 - pr;
    let nf = n as f64;
    let mode = Some(((nf + 1.0) * pr).floor().min(nf));
    let kurtosis_excess =
        (n > 0 && pr > 0.0 && pr < 1.0).then(|| (1.0 - 6.0 * pr * q) / (nf * pr * q));
    Ok(disc_u64(dist, Extras { mode, median: None, kurtosis_excess }))
}

fn build_negative_binomial(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let r = positive(f, "successes", p.required("successes", &["successes", "r"])?)?;
    let pr = p.required("success_fraction", PROB)?;
    Ok(Box::new(NegBinomial::new(r, pr)?))
}

fn build_geometric(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let pr = p.required("success_fraction", PROB)?;
    let dist = Geometric::new(pr).map_err(|e| backend_err(f, e))?;
    let kurtosis_excess = (pr < 1.0).then(|| 6.0 + pr * pr / (1.0 - pr));
    Ok(disc_u64(dist, Extras { mode: Some(1.0), median: None, kurtosis_excess }))
}

fn build_bernoulli(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let pr = p.required("success_fraction", PROB)?;
    let dist = Bernoulli::new(pr).map_err(|e| backend_err(f, e))?;
    let mode = if pr < 0.5 {
        Some(0.0)
    } else if pr > 0.5 {
        Some(1.0)
    } else {
        None
    };
    let median = if pr < 0.5 {
        Some(0.0)
    } else if pr > 0.5 {
        Some(1.0)
    } else {
        Some(0.5)
    };
    let q = 1.0 - pr;
    let kurtosis_excess =
        (pr > 0.0 && pr < 1.0).then(|| (1.0 - 6.0 * pr * q) / (pr * q));
    Ok(disc_u64(dist, Extras { mode, median, kurtosis_excess }))
}

fn build_cauchy(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let location = finite(f, "location", p.optional(LOCATION, 0.0))?;
    let scale = positive(f, "scale", p.optional(&["scale", "gamma", "b"], 1.0))?;
    let dist = Cauchy::new(location, scale).map_err(|e| backend_err(f, e))?;
    // Moments are None straight from the backend; only mode/median exist.
    Ok(cont(
        dist,
        Extras { mode: Some(location), median: Some(location), kurtosis_excess: None },
    ))
}

fn build_exponential(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let lambda = positive(f, "lambda", p.optional(&["lambda", "rate"], 1.0))?;
    let dist = Exp::new(lambda).map_err(|e| backend_err(f, e))?;
    Ok(cont(
        dist,
        Extras {
            mode: Some(0.0),
            median: Some(std::f64::consts::LN_2 / lambda),
            kurtosis_excess: Some(6.0),
        },
    ))
}

fn build_extreme_value(p: &Params) -> Result<Box<dyn Law>> {
    let location = p.optional(&["location", "a", "mu"], 0.0);
    let scale = p.optional(&["scale", "b", "beta"], 1.0);
    Ok(Box::new(Gumbel::new(location, scale)?))
}

fn build_logistic(p: &Params) -> Result<Box<dyn Law>> {
    let location = p.optional(&["location", "mu", "mean"], 0.0);
    let scale = p.optional(&["scale", "s"], 1.0);
    Ok(Box::new(Logistic::new(location, scale)?))
}

fn build_lognormal(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let location = finite(f, "location", p.optional(&["location", "m", "mu", "logmean"], 0.0))?;
    let scale = positive(f, "scale", p.optional(&["scale", "s", "sigma", "logstd"], 1.0))?;
    let dist = LogNormal::new(location, scale).map_err(|e| backend_err(f, e))?;
    let s2 = scale * scale;
    Ok(cont(
        dist,
        Extras {
            mode: Some((location - s2).exp()),
            median: Some(location.exp()),
            kurtosis_excess: Some(
                (4.0 * s2).exp() + 2.0 * (3.0 * s2).exp() + 3.0 * (2.0 * s2).exp() - 6.0,
            ),
        },
    ))
}

fn build_pareto(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let scale = positive(f, "scale", p.optional(&["scale", "xm", "x_min", "minimum"], 1.0))?;
    let shape = positive(f, "shape", p.optional(&["shape", "alpha"], 1.0))?;
    let dist = Pareto::new(scale, shape).map_err(|e| backend_err(f, e))?;
    let kurtosis_excess = (shape > 4.0).then(|| {
        6.0 * (shape.powi(3) + shape * shape - 6.0 * shape - 2.0)
            / (shape * (shape - 3.0) * (shape - 4.0))
    });
    Ok(cont(
        dist,
        Extras {
            mode: Some(scale),
            median: Some(scale * 2.0_f64.powf(1.0 / shape)),
            kurtosis_excess,
        },
    ))
}

fn build_rayleigh(p: &Params) -> Result<Box<dyn Law>> {
    let sigma = p.optional(&["sigma", "scale"], 1.0);
    Ok(Box::new(Rayleigh::new(sigma)?))
}

fn build_triangular(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let lower = finite(f, "lower", p.optional(&["lower", "a", "min"], -1.0))?;
    let mode = finite(f, "mode", p.optional(&["mode", "c"], 0.0))?;
    let upper = finite(f, "upper", p.optional(&["upper", "b", "max"], 1.0))?;
    if !(lower < upper && lower <= mode && mode <= upper) {
        return Err(Error::InvalidParameter {
            family: f,
            reason: format!(
                "requires lower <= mode <= upper with lower < upper, got ({}, {}, {})",
                lower, mode, upper
            ),
        });
    }
    let dist = Triangular::new(lower, upper, mode).map_err(|e| backend_err(f, e))?;
    let median = if mode >= 0.5 * (lower + upper) {
        lower + ((upper - lower) * (mode - lower) / 2.0).sqrt()
    } else {
        upper - ((upper - lower) * (upper - mode) / 2.0).sqrt()
    };
    Ok(cont(
        dist,
        Extras { mode: Some(mode), median: Some(median), kurtosis_excess: Some(-0.6) },
    ))
}

fn build_uniform(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let lower = finite(f, "lower", p.optional(&["lower", "a", "min"], 0.0))?;
    let upper = finite(f, "upper", p.optional(&["upper", "b", "max"], 1.0))?;
    let dist = Uniform::new(lower, upper).map_err(|e| backend_err(f, e))?;
    // Every point of the support is a mode; none is reported.
    Ok(cont(
        dist,
        Extras {
            mode: None,
            median: Some(0.5 * (lower + upper)),
            kurtosis_excess: Some(-1.2),
        },
    ))
}

fn build_weibull(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let shape = positive(f, "shape", p.required("shape", &["shape", "k"])?)?;
    let scale = positive(f, "scale", p.optional(&["scale", "lambda"], 1.0))?;
    let dist = Weibull::new(shape, scale).map_err(|e| backend_err(f, e))?;
    let mode = if shape > 1.0 {
        Some(scale * ((shape - 1.0) / shape).powf(1.0 / shape))
    } else if shape == 1.0 {
        Some(0.0)
    } else {
        None
    };
    // Kurtosis from the raw moments E[X^n] = scale^n Γ(1 + n/shape).
    let raw = |n: f64| scale.powf(n) * gamma(1.0 + n / shape);
    let (_, _, _, kx) = central_from_raw(raw(1.0), raw(2.0), raw(3.0), raw(4.0));
    Ok(cont(
        dist,
        Extras {
            mode,
            median: Some(scale * std::f64::consts::LN_2.powf(1.0 / shape)),
            kurtosis_excess: Some(kx),
        },
    ))
}

fn build_laplace(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let location = finite(f, "location", p.optional(LOCATION, 0.0))?;
    let scale = positive(f, "scale", p.optional(&["scale", "b"], 1.0))?;
    let dist = Laplace::new(location, scale).map_err(|e| backend_err(f, e))?;
    Ok(cont(
        dist,
        Extras { mode: Some(location), median: Some(location), kurtosis_excess: Some(3.0) },
    ))
}

fn build_inverse_gamma(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let shape = positive(f, "shape", p.required("shape", &["shape", "alpha"])?)?;
    let rate = positive(f, "rate", p.optional(&["rate", "beta", "scale"], 1.0))?;
    let dist = InverseGamma::new(shape, rate).map_err(|e| backend_err(f, e))?;
    let kurtosis_excess =
        (shape > 4.0).then(|| (30.0 * shape - 66.0) / ((shape - 3.0) * (shape - 4.0)));
    Ok(cont(
        dist,
        Extras { mode: Some(rate / (shape + 1.0)), median: None, kurtosis_excess },
    ))
}

fn build_chi(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let df = positive(f, "df", p.required("df", &["df", "degrees_of_freedom", "k", "nu"])?)?;
    let dist = Chi::new(df).map_err(|e| backend_err(f, e))?;
    let mode = (df >= 1.0).then(|| (df - 1.0).sqrt());
    Ok(cont(dist, Extras { mode, median: None, kurtosis_excess: None }))
}

fn build_erlang(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let shape = uint(f, "shape", p.required("shape", &["shape", "k"])?)?;
    if shape == 0 {
        return Err(Error::InvalidParameter {
            family: f,
            reason: "shape must be >= 1".to_string(),
        });
    }
    let rate = positive(f, "rate", p.optional(&["rate", "lambda"], 1.0))?;
    let dist = Erlang::new(shape, rate).map_err(|e| backend_err(f, e))?;
    let k = shape as f64;
    Ok(cont(
        dist,
        Extras {
            mode: Some((k - 1.0) / rate),
            median: None,
            kurtosis_excess: Some(6.0 / k),
        },
    ))
}

fn build_discrete_uniform(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let a = int(f, "min", p.required("min", &["min", "a", "lower"])?)?;
    let b = int(f, "max", p.required("max", &["max", "b", "upper"])?)?;
    let dist = DiscreteUniform::new(a, b).map_err(|e| backend_err(f, e))?;
    let n = (b - a + 1) as f64;
    let kurtosis_excess =
        (n > 1.0).then(|| -1.2 * (n * n + 1.0) / (n * n - 1.0));
    Ok(disc_i64(
        dist,
        Extras { mode: None, median: Some(0.5 * (a + b) as f64), kurtosis_excess },
    ))
}

fn build_hypergeometric(p: &Params) -> Result<Box<dyn Law>> {
    let f = p.family();
    let population = uint(f, "population", p.required("population", &["population", "total"])?)?;
    let successes = uint(f, "successes", p.required("successes", &["successes", "defective"])?)?;
    let draws =
        uint(f, "draws", p.required("draws", &["draws", "sample", "sample_size"])?)?;
    let dist =
        Hypergeometric::new(population, successes, draws).map_err(|e| backend_err(f, e))?;
    let mode = Some((((draws + 1) * (successes + 1)) as f64 / (population + 2) as f64).floor());
    Ok(disc_u64(dist, Extras { mode, median: None, kurtosis_excess: None }))
}

fn build_hyperexponential(p: &Params) -> Result<Box<dyn Law>> {
    let v = indexed::collect(p.family(), p.entries())?;
    Ok(Box::new(HyperExponential::new(v.rates, v.weights)?))
}

fn build_stable(kind: StableKind, p: &Params) -> Result<Box<dyn Law>> {
    let location = p.optional(&["location", "mu"], 0.0);
    let scale = p.optional(&["scale", "c", "sigma"], 1.0);
    Ok(Box::new(StableLaw::new(kind, location, scale)?))
}

fn build_landau(p: &Params) -> Result<Box<dyn Law>> {
    build_stable(StableKind::Landau, p)
}

fn build_holtsmark(p: &Params) -> Result<Box<dyn Law>> {
    build_stable(StableKind::Holtsmark, p)
}

fn build_map_airy(p: &Params) -> Result<Box<dyn Law>> {
    build_stable(StableKind::MapAiry, p)
}

fn build_saspoint5(p: &Params) -> Result<Box<dyn Law>> {
    build_stable(StableKind::SasPoint5, p)
}

static FAMILIES: &[FamilyDef] = &[
    FamilyDef { canonical: "gamma", spellings: &["gamma"], builder: build_gamma },
    FamilyDef {
        canonical: "normal",
        spellings: &["normal", "gaussian", "gauss"],
        builder: build_normal,
    },
    FamilyDef {
        canonical: "student_t",
        spellings: &["studentt", "studentst", "students", "t"],
        builder: build_student_t,
    },
    FamilyDef {
        canonical: "fisher_f",
        spellings: &["fisherf", "f", "fisher", "fishersnedecor", "snedecorf"],
        builder: build_fisher_f,
    },
    FamilyDef { canonical: "arcsine", spellings: &["arcsine", "arcsin"], builder: build_arcsine },
    FamilyDef { canonical: "beta", spellings: &["beta"], builder: build_beta },
    FamilyDef {
        canonical: "chi_squared",
        spellings: &["chisquared", "chisquare", "chi2", "chisq", "x2"],
        builder: build_chi_squared,
    },
    FamilyDef {
        canonical: "non_central_chi_squared",
        spellings: &[
            "noncentralchisquared",
            "noncentralchisquare",
            "ncchisquared",
            "ncchisquare",
            "chisquarednoncentral",
        ],
        builder: build_nc_chi_squared,
    },
    FamilyDef { canonical: "poisson", spellings: &["poisson"], builder: build_poisson },
    FamilyDef {
        canonical: "binomial",
        spellings: &["binomial", "binom"],
        builder: build_binomial,
    },
    FamilyDef {
        canonical: "negative_binomial",
        spellings: &["negativebinomial", "negbinomial", "negbinom", "nbinom", "nbinomial"],
        builder: build_negative_binomial,
    },
    FamilyDef {
        canonical: "geometric",
        spellings: &["geometric", "geom"],
        builder: build_geometric,
    },
    FamilyDef { canonical: "bernoulli", spellings: &["bernoulli"], builder: build_bernoulli },
    FamilyDef { canonical: "cauchy", spellings: &["cauchy", "lorentz"], builder: build_cauchy },
    FamilyDef {
        canonical: "exponential",
        spellings: &["exponential", "exp"],
        builder: build_exponential,
    },
    FamilyDef {
        canonical: "extreme_value",
        spellings: &["extremevalue", "gumbel", "ev", "extremevaluetypei"],
        builder: build_extreme_value,
    },
    FamilyDef { canonical: "logistic", spellings: &["logistic"], builder: build_logistic },
    FamilyDef {
        canonical: "lognormal",
        spellings: &["lognormal", "lognorm", "galton"],
        builder: build_lognormal,
    },
    FamilyDef { canonical: "pareto", spellings: &["pareto"], builder: build_pareto },
    FamilyDef { canonical: "rayleigh", spellings: &["rayleigh"], builder: build_rayleigh },
    FamilyDef {
        canonical: "triangular",
        spellings: &["triangular", "triangle"],
        builder: build_triangular,
    },
    FamilyDef {
        canonical: "uniform",
        spellings: &["uniform", "rectangular"],
        builder: build_uniform,
    },
    FamilyDef { canonical: "weibull", spellings: &["weibull"], builder: build_weibull },
    FamilyDef { canonical: "laplace", spellings: &["laplace"], builder: build_laplace },
    FamilyDef {
        canonical: "inverse_gamma",
        spellings: &["inversegamma", "invgamma"],
        builder: build_inverse_gamma,
    },
    FamilyDef { canonical: "chi", spellings: &["chi"], builder: build_chi },
    FamilyDef { canonical: "erlang", spellings: &["erlang"], builder: build_erlang },
    FamilyDef {
        canonical: "discrete_uniform",
        spellings: &["discreteuniform", "uniformint", "uniformdiscrete"],
        builder: build_discrete_uniform,
    },
    FamilyDef {
        canonical: "hypergeometric",
        spellings: &["hypergeometric", "hypergeom"],
        builder: build_hypergeometric,
    },
    FamilyDef {
        canonical: "hyperexponential",
        spellings: &["hyperexponential", "hyperexp", "hexp", "mixedexponential"],
        builder: build_hyperexponential,
    },
    FamilyDef { canonical: "landau", spellings: &["landau"], builder: build_landau },
    FamilyDef { canonical: "holtsmark", spellings: &["holtsmark"], builder: build_holtsmark },
    FamilyDef {
        canonical: "map_airy",
        spellings: &["mapairy", "mapairey"],
        builder: build_map_airy,
    },
    FamilyDef {
        canonical: "saspoint5",
        spellings: &["saspoint5", "sasonehalf", "symmetricalphastablehalf"],
        builder: build_saspoint5,
    },
];
