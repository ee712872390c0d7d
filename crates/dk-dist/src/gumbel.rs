//! Gumbel (extreme-value type I) distribution.

use std::f64::consts::PI;

use dk_core::{Error, Result};

use crate::law::Law;
use crate::math::{EULER_GAMMA, ZETA_3};

/// Gumbel distribution with `location` and `scale`.
#[derive(Debug, Clone, Copy)]
pub struct Gumbel {
    location: f64,
    scale: f64,
}

impl Gumbel {
    /// Create a Gumbel distribution; requires finite location and finite
    /// positive scale.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameter {
                family: "extreme_value",
                reason: format!("location must be finite, got {}", location),
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter {
                family: "extreme_value",
                reason: format!("scale must be finite and > 0, got {}", scale),
            });
        }
        Ok(Self { location, scale })
    }

    #[inline]
    fn z(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }
}

impl Law for Gumbel {
    fn pdf(&self, x: f64) -> f64 {
        self.ln_pdf(x).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        let z = self.z(x);
        -self.scale.ln() - z - (-z).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        (-(-self.z(x)).exp()).exp()
    }

    fn sf(&self, x: f64) -> f64 {
        -(-(-self.z(x)).exp()).exp_m1()
    }

    fn quantile(&self, p: f64) -> f64 {
        self.location - self.scale * (-p.ln()).ln()
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        self.location - self.scale * (-(-q).ln_1p()).ln()
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.location + EULER_GAMMA * self.scale)
    }

    fn variance(&self) -> Option<f64> {
        Some(PI * PI * self.scale * self.scale / 6.0)
    }

    fn skewness(&self) -> Option<f64> {
        Some(12.0 * 6.0_f64.sqrt() * ZETA_3 / (PI * PI * PI))
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(2.4)
    }

    fn mode(&self) -> Option<f64> {
        Some(self.location)
    }

    fn median(&self) -> Option<f64> {
        Some(self.location - self.scale * 2.0_f64.ln().ln())
    }

    fn entropy(&self) -> Option<f64> {
        Some(self.scale.ln() + EULER_GAMMA + 1.0)
    }
}
