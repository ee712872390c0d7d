//! The public distribution handle.
//!
//! [`Distribution`] owns a type-erased law and layers the uniform
//! sentinel conventions on top of it: domain errors become NaN, overflow
//! becomes +∞, and statistics a family does not define are `None`.
//! Dropping the handle releases the law; there is no separate release
//! call to misuse.

use crate::law::Law;

/// Every operation a handle exposes, for capability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Pdf,
    LnPdf,
    Cdf,
    Sf,
    Hazard,
    Chf,
    Quantile,
    QuantileComplement,
    Mean,
    Variance,
    StdDev,
    Skewness,
    Kurtosis,
    KurtosisExcess,
    Mode,
    Median,
    Entropy,
    Range,
    Support,
}

impl Op {
    /// All operations, in table order.
    pub const ALL: [Op; 19] = [
        Op::Pdf,
        Op::LnPdf,
        Op::Cdf,
        Op::Sf,
        Op::Hazard,
        Op::Chf,
        Op::Quantile,
        Op::QuantileComplement,
        Op::Mean,
        Op::Variance,
        Op::StdDev,
        Op::Skewness,
        Op::Kurtosis,
        Op::KurtosisExcess,
        Op::Mode,
        Op::Median,
        Op::Entropy,
        Op::Range,
        Op::Support,
    ];

    /// Stable lower-case name, as used by the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Op::Pdf => "pdf",
            Op::LnPdf => "ln_pdf",
            Op::Cdf => "cdf",
            Op::Sf => "sf",
            Op::Hazard => "hazard",
            Op::Chf => "chf",
            Op::Quantile => "quantile",
            Op::QuantileComplement => "quantile_complement",
            Op::Mean => "mean",
            Op::Variance => "variance",
            Op::StdDev => "std_dev",
            Op::Skewness => "skewness",
            Op::Kurtosis => "kurtosis",
            Op::KurtosisExcess => "kurtosis_excess",
            Op::Mode => "mode",
            Op::Median => "median",
            Op::Entropy => "entropy",
            Op::Range => "range",
            Op::Support => "support",
        }
    }
}

/// A constructed, immutable probability distribution.
///
/// Obtained from [`crate::make`]; all point evaluations are total
/// functions of `f64` returning sentinel values on domain errors (NaN)
/// and overflow (+∞).
pub struct Distribution {
    family: &'static str,
    law: Box<dyn Law>,
}

impl Distribution {
    pub(crate) fn new(family: &'static str, law: Box<dyn Law>) -> Self {
        Self { family, law }
    }

    /// Canonical family name (normalized spelling).
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// `true` for integer-supported families.
    pub fn is_discrete(&self) -> bool {
        self.law.is_discrete()
    }

    /// Probability density (mass) at `x`; NaN on domain error.
    ///
    /// A point outside the support is a domain error for every family,
    /// continuous and discrete alike.
    pub fn pdf(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        let (lo, hi) = self.law.support();
        if x < lo || x > hi {
            return f64::NAN;
        }
        self.law.pdf(x)
    }

    /// Log-density at `x`; NaN on domain error.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        let (lo, hi) = self.law.support();
        if x < lo || x > hi {
            return f64::NAN;
        }
        self.law.ln_pdf(x)
    }

    /// Cumulative probability `P(X <= x)`; NaN on domain error.
    pub fn cdf(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        self.law.cdf(x)
    }

    /// Survival `P(X > x)`; NaN on domain error.
    pub fn sf(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }
        self.law.sf(x)
    }

    /// Hazard `pdf(x) / sf(x)`.
    ///
    /// Guards: a zero density is exactly zero hazard (never 0/0), and a
    /// density that would overflow the ratio (`pdf > sf * MAX`) yields
    /// NaN rather than +∞.
    pub fn hazard(&self, x: f64) -> f64 {
        let d = self.pdf(x);
        let s = self.sf(x);
        if d == 0.0 {
            return 0.0;
        }
        if d > s * f64::MAX {
            return f64::NAN;
        }
        d / s
    }

    /// Cumulative hazard `-ln(sf(x))`.
    pub fn chf(&self, x: f64) -> f64 {
        -self.sf(x).ln()
    }

    /// Inverse cumulative probability.
    ///
    /// `p` outside `[0, 1]` (or NaN) is a domain error (NaN); the
    /// boundaries map to the range endpoints, which is ±∞ — the overflow
    /// sentinel — for unbounded tails.
    pub fn quantile(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NAN;
        }
        let (lo, hi) = self.law.range();
        if p == 0.0 {
            return lo;
        }
        if p == 1.0 {
            return hi;
        }
        self.law.quantile(p)
    }

    /// Inverse survival; same guards as [`Distribution::quantile`].
    pub fn quantile_complement(&self, q: f64) -> f64 {
        if !(0.0..=1.0).contains(&q) {
            return f64::NAN;
        }
        let (lo, hi) = self.law.range();
        if q == 0.0 {
            return hi;
        }
        if q == 1.0 {
            return lo;
        }
        self.law.quantile_complement(q)
    }

    /// Theoretical domain of the family.
    pub fn range(&self) -> (f64, f64) {
        self.law.range()
    }

    /// Domain of non-zero probability.
    pub fn support(&self) -> (f64, f64) {
        self.law.support()
    }

    /// Mean, if the family defines one.
    pub fn mean(&self) -> Option<f64> {
        self.law.mean()
    }

    /// Variance, if the family defines one.
    pub fn variance(&self) -> Option<f64> {
        self.law.variance()
    }

    /// Standard deviation, if the family defines a variance.
    pub fn std_dev(&self) -> Option<f64> {
        self.law.variance().map(f64::sqrt)
    }

    /// Skewness, if the family defines one.
    pub fn skewness(&self) -> Option<f64> {
        self.law.skewness()
    }

    /// Kurtosis (excess + 3), if the family defines one.
    pub fn kurtosis(&self) -> Option<f64> {
        self.law.kurtosis_excess().map(|k| k + 3.0)
    }

    /// Excess kurtosis, if the family defines one.
    pub fn kurtosis_excess(&self) -> Option<f64> {
        self.law.kurtosis_excess()
    }

    /// Mode, if the family defines a unique one.
    pub fn mode(&self) -> Option<f64> {
        self.law.mode()
    }

    /// Median (closed form or `quantile(0.5)`).
    pub fn median(&self) -> Option<f64> {
        self.law.median()
    }

    /// Entropy, if the family defines one in closed form.
    pub fn entropy(&self) -> Option<f64> {
        self.law.entropy()
    }

    /// Whether `op` is defined for this family.
    ///
    /// Point evaluations are always defined (they answer with sentinel
    /// values); scalar statistics mirror their `Option` results.
    pub fn supports(&self, op: Op) -> bool {
        match op {
            Op::Mean => self.mean().is_some(),
            Op::Variance | Op::StdDev => self.variance().is_some(),
            Op::Skewness => self.skewness().is_some(),
            Op::Kurtosis | Op::KurtosisExcess => self.kurtosis_excess().is_some(),
            Op::Mode => self.mode().is_some(),
            Op::Median => self.median().is_some(),
            Op::Entropy => self.entropy().is_some(),
            _ => true,
        }
    }
}

impl std::fmt::Debug for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distribution").field("family", &self.family).finish()
    }
}
