//! Rayleigh distribution.

use std::f64::consts::PI;

use dk_core::{Error, Result};

use crate::law::Law;
use crate::math::EULER_GAMMA;

/// Rayleigh distribution with scale `sigma`.
#[derive(Debug, Clone, Copy)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    /// Create a Rayleigh distribution; requires finite positive `sigma`.
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidParameter {
                family: "rayleigh",
                reason: format!("sigma must be finite and > 0, got {}", sigma),
            });
        }
        Ok(Self { sigma })
    }

    /// `x² / (2σ²)`.
    #[inline]
    fn t(&self, x: f64) -> f64 {
        let z = x / self.sigma;
        0.5 * z * z
    }
}

impl Law for Rayleigh {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        x / (self.sigma * self.sigma) * (-self.t(x)).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        x.ln() - 2.0 * self.sigma.ln() - self.t(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-self.t(x)).exp_m1()
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        (-self.t(x)).exp()
    }

    fn quantile(&self, p: f64) -> f64 {
        self.sigma * (-2.0 * (-p).ln_1p()).sqrt()
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        self.sigma * (-2.0 * q.ln()).sqrt()
    }

    fn range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn mean(&self) -> Option<f64> {
        Some(self.sigma * (0.5 * PI).sqrt())
    }

    fn variance(&self) -> Option<f64> {
        Some((2.0 - 0.5 * PI) * self.sigma * self.sigma)
    }

    fn skewness(&self) -> Option<f64> {
        Some(2.0 * PI.sqrt() * (PI - 3.0) / (4.0 - PI).powf(1.5))
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        let d = 4.0 - PI;
        Some(-(6.0 * PI * PI - 24.0 * PI + 16.0) / (d * d))
    }

    fn mode(&self) -> Option<f64> {
        Some(self.sigma)
    }

    fn median(&self) -> Option<f64> {
        Some(self.sigma * (2.0 * 2.0_f64.ln()).sqrt())
    }

    fn entropy(&self) -> Option<f64> {
        Some(1.0 + (self.sigma / std::f64::consts::SQRT_2).ln() + 0.5 * EULER_GAMMA)
    }
}
