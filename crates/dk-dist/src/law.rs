//! The polymorphic operation surface every family implements.
//!
//! A constructed distribution is a `Box<dyn Law + Send + Sync>`; the
//! public `Distribution` handle wraps it and adds the sentinel-safety
//! layer (argument guards, hazard overflow guard, quantile boundary
//! handling). `Law` implementations may therefore assume:
//!
//! - evaluation arguments are finite,
//! - quantile probabilities are strictly inside `(0, 1)`.
//!
//! Scalar statistics return `Option<f64>`; `None` means the family does
//! not define that statistic (Cauchy moments, stable-law kurtosis, ...),
//! which replaces the original null-function-pointer convention.

/// Uniform operation set over one distribution family.
pub trait Law: Send + Sync {
    /// Probability density (or mass) at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of [`Law::pdf`].
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative probability `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival `P(X > x)`.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Inverse cumulative probability; `p` is strictly inside `(0, 1)`.
    fn quantile(&self, p: f64) -> f64;

    /// Inverse survival; `q` is strictly inside `(0, 1)`.
    fn quantile_complement(&self, q: f64) -> f64 {
        self.quantile(1.0 - q)
    }

    /// Theoretical domain of the family.
    fn range(&self) -> (f64, f64);

    /// Domain of non-zero probability; defaults to [`Law::range`].
    fn support(&self) -> (f64, f64) {
        self.range()
    }

    /// `true` for integer-supported families.
    fn is_discrete(&self) -> bool {
        false
    }

    /// Mean, if defined.
    fn mean(&self) -> Option<f64> {
        None
    }

    /// Variance, if defined.
    fn variance(&self) -> Option<f64> {
        None
    }

    /// Skewness, if defined.
    fn skewness(&self) -> Option<f64> {
        None
    }

    /// Excess kurtosis, if defined.
    fn kurtosis_excess(&self) -> Option<f64> {
        None
    }

    /// Mode, if defined and unique.
    fn mode(&self) -> Option<f64> {
        None
    }

    /// Median; defaults to the numeric `quantile(0.5)`.
    fn median(&self) -> Option<f64> {
        Some(self.quantile(0.5))
    }

    /// Differential (or discrete) entropy, if defined in closed form.
    fn entropy(&self) -> Option<f64> {
        None
    }
}
