//! Arcsine distribution on `[min, max]`.
//!
//! The backend does not ship this family, but every operation has an
//! elementary closed form.

use std::f64::consts::PI;

use dk_core::{Error, Result};

use crate::law::Law;

/// Arcsine distribution with bounded support `[a, b]`.
#[derive(Debug, Clone, Copy)]
pub struct Arcsine {
    a: f64,
    b: f64,
}

impl Arcsine {
    /// Create an arcsine distribution; requires finite `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(Error::InvalidParameter {
                family: "arcsine",
                reason: format!("support bounds must be finite with min < max, got [{}, {}]", a, b),
            });
        }
        Ok(Self { a, b })
    }
}

impl Law for Arcsine {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || x > self.b {
            return 0.0;
        }
        // Unbounded at both endpoints.
        1.0 / (PI * ((x - self.a) * (self.b - x)).sqrt())
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            2.0 / PI * ((x - self.a) / (self.b - self.a)).sqrt().asin()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= self.a {
            1.0
        } else if x >= self.b {
            0.0
        } else {
            2.0 / PI * ((self.b - x) / (self.b - self.a)).sqrt().asin()
        }
    }

    fn quantile(&self, p: f64) -> f64 {
        let s = (0.5 * PI * p).sin();
        self.a + (self.b - self.a) * s * s
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        let s = (0.5 * PI * q).sin();
        self.b - (self.b - self.a) * s * s
    }

    fn range(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    fn mean(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }

    fn variance(&self) -> Option<f64> {
        let w = self.b - self.a;
        Some(w * w / 8.0)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        Some(-1.5)
    }

    // Bimodal at the endpoints; no unique mode.

    fn median(&self) -> Option<f64> {
        Some(0.5 * (self.a + self.b))
    }

    fn entropy(&self) -> Option<f64> {
        Some((PI * (self.b - self.a) / 4.0).ln())
    }
}
