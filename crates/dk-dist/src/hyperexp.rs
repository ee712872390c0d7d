//! Hyperexponential mixture distribution.
//!
//! A weighted mixture of exponential phases. The component vectors are
//! reconstructed from the caller's parameter bag by [`crate::indexed`];
//! this module validates them, normalizes the weights, and evaluates the
//! mixture in closed form (raw moments are `E[X^n] = n! Σ wᵢ λᵢ⁻ⁿ`).

use dk_core::{Error, Result};

use crate::law::Law;
use crate::math::{bisect_quantile, central_from_raw, log_sum_exp};

/// Hyperexponential distribution with positive phase rates and
/// normalized phase weights of equal length.
#[derive(Debug, Clone)]
pub struct HyperExponential {
    rates: Vec<f64>,
    weights: Vec<f64>,
}

impl HyperExponential {
    /// Create a hyperexponential mixture.
    ///
    /// `weights = None` means equal weights. Supplied weights must be
    /// positive and are normalized to sum to one.
    pub fn new(rates: Vec<f64>, weights: Option<Vec<f64>>) -> Result<Self> {
        if rates.is_empty() {
            return Err(Error::MissingParameter { family: "hyperexponential", name: "rates" });
        }
        for &r in &rates {
            if !r.is_finite() || r <= 0.0 {
                return Err(Error::InvalidParameter {
                    family: "hyperexponential",
                    reason: format!("phase rates must be finite and > 0, got {}", r),
                });
            }
        }
        let weights = match weights {
            Some(w) => {
                if w.len() != rates.len() {
                    return Err(Error::InvalidParameter {
                        family: "hyperexponential",
                        reason: format!("{} weights supplied for {} rates", w.len(), rates.len()),
                    });
                }
                for &p in &w {
                    if !p.is_finite() || p <= 0.0 {
                        return Err(Error::InvalidParameter {
                            family: "hyperexponential",
                            reason: format!("phase weights must be finite and > 0, got {}", p),
                        });
                    }
                }
                let total: f64 = w.iter().sum();
                w.into_iter().map(|p| p / total).collect()
            }
            None => vec![1.0 / rates.len() as f64; rates.len()],
        };
        Ok(Self { rates, weights })
    }

    /// Number of phases.
    pub fn phases(&self) -> usize {
        self.rates.len()
    }

    /// Raw moment `E[X^n] = n! Σ wᵢ λᵢ⁻ⁿ`.
    fn raw_moment(&self, n: u32) -> f64 {
        let fact: f64 = (1..=n).map(f64::from).product();
        fact * self
            .weights
            .iter()
            .zip(&self.rates)
            .map(|(w, r)| w / r.powi(n as i32))
            .sum::<f64>()
    }
}

impl Law for HyperExponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.weights
            .iter()
            .zip(&self.rates)
            .map(|(w, r)| w * r * (-r * x).exp())
            .sum()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        let terms: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.rates)
            .map(|(w, r)| w.ln() + r.ln() - r * x)
            .collect();
        log_sum_exp(&terms)
    }

    fn cdf(&self, x: f64) -> f64 {
        1.0 - self.sf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 1.0;
        }
        self.weights
            .iter()
            .zip(&self.rates)
            .map(|(w, r)| w * (-r * x).exp())
            .sum()
    }

    fn quantile(&self, p: f64) -> f64 {
        // Seed the bracket with the slowest phase's own quantile.
        let slow = self.rates.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = -(-p).ln_1p() / slow + 1.0;
        bisect_quantile(|x| self.cdf(x), p, 0.0, hi)
    }

    fn range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.raw_moment(1))
    }

    fn variance(&self) -> Option<f64> {
        let m1 = self.raw_moment(1);
        Some(self.raw_moment(2) - m1 * m1)
    }

    fn skewness(&self) -> Option<f64> {
        let (_, _, skew, _) = central_from_raw(
            self.raw_moment(1),
            self.raw_moment(2),
            self.raw_moment(3),
            self.raw_moment(4),
        );
        Some(skew)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        let (_, _, _, kx) = central_from_raw(
            self.raw_moment(1),
            self.raw_moment(2),
            self.raw_moment(3),
            self.raw_moment(4),
        );
        Some(kx)
    }

    fn mode(&self) -> Option<f64> {
        // Every phase density is decreasing, so the mixture peaks at 0.
        Some(0.0)
    }

    // Entropy has no closed form for the mixture.
}
