//! Adapters from `statrs` distribution values to [`Law`].
//!
//! Point evaluations and the `Option`-returning moments delegate straight
//! to the backend; family facts the backend does not expose (mode,
//! closed-form median, excess kurtosis) are computed from the resolved
//! parameters at construction time and carried alongside the value.

use num_traits::{Num, NumAssignOps};
use statrs::distribution::{Continuous, ContinuousCDF, Discrete, DiscreteCDF};
use statrs::statistics::{Distribution as Moments, Max, Min};

use crate::law::Law;

/// Per-family closed-form facts the backend does not provide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extras {
    /// Unique mode, where defined.
    pub mode: Option<f64>,
    /// Closed-form median; `None` falls back to `quantile(0.5)`.
    pub median: Option<f64>,
    /// Closed-form excess kurtosis, where defined.
    pub kurtosis_excess: Option<f64>,
}

/// A continuous backend distribution plus its [`Extras`].
pub struct ContinuousLaw<D> {
    dist: D,
    extras: Extras,
}

impl<D> ContinuousLaw<D> {
    pub fn new(dist: D, extras: Extras) -> Self {
        Self { dist, extras }
    }
}

impl<D> Law for ContinuousLaw<D>
where
    D: Continuous<f64, f64>
        + ContinuousCDF<f64, f64>
        + Moments<f64>
        + Min<f64>
        + Max<f64>
        + Send
        + Sync,
{
    fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        self.dist.ln_pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.dist.sf(x)
    }

    fn quantile(&self, p: f64) -> f64 {
        self.dist.inverse_cdf(p)
    }

    fn range(&self) -> (f64, f64) {
        (self.dist.min(), self.dist.max())
    }

    fn mean(&self) -> Option<f64> {
        self.dist.mean()
    }

    fn variance(&self) -> Option<f64> {
        self.dist.variance()
    }

    fn skewness(&self) -> Option<f64> {
        self.dist.skewness()
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        self.extras.kurtosis_excess
    }

    fn mode(&self) -> Option<f64> {
        self.extras.mode
    }

    fn median(&self) -> Option<f64> {
        self.extras.median.or_else(|| Some(self.quantile(0.5)))
    }

    fn entropy(&self) -> Option<f64> {
        self.dist.entropy()
    }
}

/// Integer argument type of a discrete backend distribution.
///
/// The facade speaks `f64` everywhere; adapters convert after the range
/// and integrality guards have passed. The supertraits match the bounds
/// the backend's `Discrete`/`DiscreteCDF` traits place on their argument
/// type.
pub trait DiscreteArg: Copy + Ord + Num + NumAssignOps {
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    /// Upper bound as `f64`, mapping the integer type's maximum (the
    /// backend's stand-in for an unbounded support) to `+inf`.
    fn upper_to_f64(self) -> f64;
}

impl DiscreteArg for u64 {
    fn from_f64(x: f64) -> Self {
        x as u64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn upper_to_f64(self) -> f64 {
        if self == u64::MAX { f64::INFINITY } else { self as f64 }
    }
}

impl DiscreteArg for i64 {
    fn from_f64(x: f64) -> Self {
        x as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn upper_to_f64(self) -> f64 {
        if self == i64::MAX { f64::INFINITY } else { self as f64 }
    }
}

/// A discrete backend distribution plus its [`Extras`].
pub struct DiscreteLaw<D, I> {
    dist: D,
    extras: Extras,
    _marker: std::marker::PhantomData<I>,
}

impl<D, I> DiscreteLaw<D, I> {
    pub fn new(dist: D, extras: Extras) -> Self {
        Self { dist, extras, _marker: std::marker::PhantomData }
    }
}

impl<D, I> DiscreteLaw<D, I>
where
    D: Discrete<I, f64> + DiscreteCDF<I, f64> + Min<I> + Max<I>,
    I: DiscreteArg,
{
    fn lo(&self) -> f64 {
        self.dist.min().to_f64()
    }

    fn hi(&self) -> f64 {
        self.dist.max().upper_to_f64()
    }

    /// Smallest support point `k` with `cdf(k) >= p`.
    ///
    /// The backend's own inverters are not relied on here because
    /// probability guards already live in the handle layer.
    fn quantile_int(&self, p: f64) -> f64 {
        discrete_quantile(|k| self.dist.cdf(I::from_f64(k)), self.lo(), self.hi(), p)
    }
}

/// Smallest integer `k` in `[lo, hi]` with `cdf(k) >= p`, by galloping
/// search from the lower bound followed by bisection.
///
/// `lo` must be integer-valued; `hi` may be `+inf` for unbounded
/// supports. The caller guarantees `p` strictly inside `(0, 1)`.
pub(crate) fn discrete_quantile<F: Fn(f64) -> f64>(cdf: F, lo: f64, hi: f64, p: f64) -> f64 {
    if cdf(lo) >= p {
        return lo;
    }
    let mut step = 1.0;
    let mut a = lo;
    let mut b = lo + step;
    while b < hi && cdf(b) < p {
        a = b;
        step *= 2.0;
        b = (b + step).min(hi);
    }
    // Invariant: cdf(a) < p <= cdf(b).
    while b - a > 1.0 {
        let m = (0.5 * (a + b)).floor();
        if cdf(m) < p {
            a = m;
        } else {
            b = m;
        }
    }
    b
}

impl<D, I> Law for DiscreteLaw<D, I>
where
    D: Discrete<I, f64> + DiscreteCDF<I, f64> + Moments<f64> + Min<I> + Max<I> + Send + Sync,
    I: DiscreteArg + Send + Sync,
{
    fn pdf(&self, x: f64) -> f64 {
        // Mass at non-integer points or outside the range is a domain
        // error, matching the continuous sentinel convention.
        if x.fract() != 0.0 || x < self.lo() || x > self.hi() {
            return f64::NAN;
        }
        self.dist.pmf(I::from_f64(x))
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < self.lo() || x > self.hi() {
            return f64::NAN;
        }
        self.dist.ln_pmf(I::from_f64(x))
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.lo() {
            return 0.0;
        }
        let k = x.floor().min(self.hi());
        self.dist.cdf(I::from_f64(k))
    }

    fn sf(&self, x: f64) -> f64 {
        if x < self.lo() {
            return 1.0;
        }
        let k = x.floor().min(self.hi());
        self.dist.sf(I::from_f64(k))
    }

    fn quantile(&self, p: f64) -> f64 {
        self.quantile_int(p)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        self.quantile_int(1.0 - q)
    }

    fn range(&self) -> (f64, f64) {
        (self.lo(), self.hi())
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn mean(&self) -> Option<f64> {
        self.dist.mean()
    }

    fn variance(&self) -> Option<f64> {
        self.dist.variance()
    }

    fn skewness(&self) -> Option<f64> {
        self.dist.skewness()
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        self.extras.kurtosis_excess
    }

    fn mode(&self) -> Option<f64> {
        self.extras.mode
    }

    fn median(&self) -> Option<f64> {
        self.extras.median.or_else(|| Some(self.quantile(0.5)))
    }

    fn entropy(&self) -> Option<f64> {
        self.dist.entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{Binomial, DiscreteUniform, Normal, Poisson};

    #[test]
    fn test_continuous_adapter_delegates() {
        let law = ContinuousLaw::new(
            Normal::new(0.0, 1.0).unwrap(),
            Extras { mode: Some(0.0), median: Some(0.0), kurtosis_excess: Some(0.0) },
        );
        assert!((law.cdf(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(law.mean(), Some(0.0));
        assert_eq!(law.range(), (f64::NEG_INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_discrete_pdf_guards() {
        let law: DiscreteLaw<_, u64> =
            DiscreteLaw::new(Binomial::new(0.4, 10).unwrap(), Extras::default());
        assert!(law.pdf(1.5).is_nan());
        assert!(law.pdf(-1.0).is_nan());
        assert!(law.pdf(11.0).is_nan());
        assert!(law.pdf(4.0) > 0.0);
    }

    #[test]
    fn test_discrete_quantile_gallop() {
        let law: DiscreteLaw<_, u64> =
            DiscreteLaw::new(Poisson::new(4.2).unwrap(), Extras::default());
        for p in [0.01, 0.3, 0.5, 0.9, 0.999] {
            let k = law.quantile(p);
            assert!(law.cdf(k) >= p, "cdf({k}) < {p}");
            if k > 0.0 {
                assert!(law.cdf(k - 1.0) < p, "quantile not minimal at p={p}");
            }
        }
    }

    #[test]
    fn test_signed_argument_adapter() {
        // DiscreteUniform takes i64 arguments; the adapter must handle a
        // support that starts below zero.
        let law: DiscreteLaw<_, i64> =
            DiscreteLaw::new(DiscreteUniform::new(-3, 4).unwrap(), Extras::default());
        assert_eq!(law.range(), (-3.0, 4.0));
        assert!((law.pdf(-3.0) - 0.125).abs() < 1e-12);
        assert!(law.pdf(-4.0).is_nan());
        assert_eq!(law.quantile(0.125), -3.0);
        assert_eq!(law.quantile(0.5), 0.0);
        assert_eq!(law.quantile(1.0 - 1e-9), 4.0);
    }

    #[test]
    fn test_discrete_cdf_floors() {
        let law: DiscreteLaw<_, u64> =
            DiscreteLaw::new(Binomial::new(0.4, 10).unwrap(), Extras::default());
        assert_eq!(law.cdf(3.7), law.cdf(3.0));
        assert_eq!(law.cdf(-0.5), 0.0);
        assert_eq!(law.sf(-0.5), 1.0);
        assert!((law.cdf(10.0) - 1.0).abs() < 1e-12);
    }
}
