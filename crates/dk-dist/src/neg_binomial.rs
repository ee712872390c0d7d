//! Negative binomial distribution.
//!
//! Counts failures before the `r`-th success, success probability `p`
//! (`r` may be real-valued, the Pólya extension). Point masses delegate
//! to the backend; the backend exposes no scalar statistics for this
//! family, so the closed forms live here.

use dk_core::{Error, Result};
use statrs::distribution::{Discrete, DiscreteCDF, NegativeBinomial};

use crate::backend::discrete_quantile;
use crate::law::Law;

pub struct NegBinomial {
    dist: NegativeBinomial,
    successes: f64,
    p: f64,
}

impl NegBinomial {
    /// Requires finite `successes > 0` and `p` in `(0, 1]`.
    pub fn new(successes: f64, p: f64) -> Result<Self> {
        let dist = NegativeBinomial::new(successes, p).map_err(|e| Error::InvalidParameter {
            family: "negative_binomial",
            reason: e.to_string(),
        })?;
        Ok(Self { dist, successes, p })
    }
}

impl Law for NegBinomial {
    fn pdf(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < 0.0 {
            return f64::NAN;
        }
        self.dist.pmf(x as u64)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.fract() != 0.0 || x < 0.0 {
            return f64::NAN;
        }
        self.dist.ln_pmf(x as u64)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        self.dist.cdf(x.floor() as u64)
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 1.0;
        }
        self.dist.sf(x.floor() as u64)
    }

    fn quantile(&self, p: f64) -> f64 {
        discrete_quantile(|k| self.cdf(k), 0.0, f64::INFINITY, p)
    }

    fn quantile_complement(&self, q: f64) -> f64 {
        self.quantile(1.0 - q)
    }

    fn range(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn mean(&self) -> Option<f64> {
        Some(self.successes * (1.0 - self.p) / self.p)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.successes * (1.0 - self.p) / (self.p * self.p))
    }

    fn skewness(&self) -> Option<f64> {
        (self.p < 1.0)
            .then(|| (2.0 - self.p) / (self.successes * (1.0 - self.p)).sqrt())
    }

    fn kurtosis_excess(&self) -> Option<f64> {
        (self.p < 1.0)
            .then(|| 6.0 / self.successes + self.p * self.p / (self.successes * (1.0 - self.p)))
    }

    fn mode(&self) -> Option<f64> {
        if self.successes > 1.0 {
            Some(((self.successes - 1.0) * (1.0 - self.p) / self.p).floor())
        } else {
            Some(0.0)
        }
    }
}
