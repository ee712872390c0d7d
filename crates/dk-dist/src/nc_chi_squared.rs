//! Non-central chi-squared distribution.
//!
//! Evaluated as the classic Poisson-weighted mixture of central
//! chi-squared laws: the density at `x` is
//! `Σⱼ e^{-λ/2} (λ/2)ʲ / j! · f_{χ²(k+2j)}(x)`, with the central terms
//! delegated to the backend. Moments are closed-form.

use dk_core::{Error, Result};
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF};
use statrs::function::gamma::ln_gamma;

use crate::law::Law;
use crate::math::bisect_quantile;

/// Tail walks stop once the per-term Poisson weight drops below this.
const TAIL_EPS: f64 = 1e-16;
const MAX_TERMS: usize = 4096;

/// Non-central chi-squared with `df` degrees of freedom and
/// non-centrality `lambda`.
#[derive(Debug, Clone, Copy)]
pub struct NonCentralChiSquared {
    df: f64,
    lambda: f64,
}

impl NonCentralChiSquared {
    /// Create a non-central chi-squared; requires `df > 0` and
    /// `lambda >= 0`, both finite.
    pub fn new(df: f64, lambda: f64) -> Result<Self> {
        if !df.is_finite() || df <= 0.0 {
            return Err(Error::InvalidParameter {
                family: "non_central_chi_squared",
                reason: format!("degrees of freedom must be finite and > 0, got {}", df),
            });
        }
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(Error::InvalidParameter {
                family: "non_central_chi_squared",
                reason: format!("non-centrality must be finite and >= 0, got {}", lambda),
            });
        }
        Ok(Self { df, lambda })
    }

    /// Poisson-weighted sum of `f(central χ²(df + 2j))`.
    ///
    /// Starts at the Poisson mode (weight computed in log space so large
    /// `lambda` cannot underflow the anchor term) and walks both tails
    /// until their mass is negligible.
    fn series<F: Fn(&ChiSquared) -> f64>(&self, term: F) -> f64 {
        let h = 0.5 * self.lambda;
        if h == 0.0 {
            return match ChiSquared::new(self.df) {
                Ok(central) => term(&central),
                Err(_) => f64::NAN,
            };
        }
        let j0 = h.floor();
        let ln_w0 = -h + j0 * h.ln() - ln_gamma(j0 + 1.0);
        let w0 = ln_w0.exp();
        let eval = |j: f64| -> f64 {
            match ChiSquared::new(self.df + 2.0 * j) {
                Ok(central) => term(&central),
                Err(_) => f64::NAN,
            }
        };
        let mut acc = w0 * eval(j0);
        // Downward tail: w(j-1) = w(j) * j / h.
        let mut w = w0;
        let mut j = j0;
        while j > 0.0 && w > TAIL_EPS {
            w *= j / h;
            j -= 1.0;
            acc += w * eval(j);
        }
        // Upward tail: w(j+1) = w(j) * h / (j+1).
        w = w0;
        j = j0;
        for _ in 0..MAX_TERMS {
            w *= h / (j + 1.0);
            j += 1.0;
            if w <= TAIL_EPS {
                break;
            }
            acc += w * eval(j);
        }
        acc
    }
}

impl Law for NonCentralChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.series(|c| c.pdf(x))
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.series(|c| c.cdf(x))
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 1.0;
        }
        self.series(|c| c.sf(x))
    }

    fn quantile(&self, p: f64) -> f64 {
        let hi = (self.df + self.lambda) * 2.0 + 10.0;
        bisect_quantile(|x| self.cdf(x), p, 0.0, hi)
    }

    fn range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.df + self.lambda)
    }

    fn variance(&self) -> Option<f64> {
        Some(2.0 * (self.df + 2.0 * self.lambda))
    }

    fn skewness(&self) -> Option<f64> {
        let d = self.df + 2.0 * self.lambda;
        Some(2.0_f64.powf(1.5) * (self.df + 3.0 * self.lambda) / d.powf(1.5))
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        let d = self.df + 2.0 * self.lambda;
        Some(12.0 * (self.df + 4.0 * self.lambda) / (d * d))
    }

    // No closed-form mode or entropy; median falls back to quantile(0.5).
}
