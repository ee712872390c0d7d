//! Small numerically-stable math utilities used across the facade.

/// Euler–Mascheroni constant.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Apéry's constant `ζ(3)`.
pub const ZETA_3: f64 = 1.202_056_903_159_594_3;

/// Stable `log(Σ exp(x_i))`.
///
/// Shifts by the maximum so the largest exponent is exactly `0`; an empty
/// slice yields `-inf` (the log of an empty sum).
pub fn log_sum_exp(xs: &[f64]) -> f64 {
    let m = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !m.is_finite() {
        // All -inf (empty sum) or a +inf/NaN term dominates.
        return m;
    }
    let s: f64 = xs.iter().map(|&x| (x - m).exp()).sum();
    m + s.ln()
}

/// Stable `log(1 + exp(x))`.
///
/// `log(1+exp(x)) = max(x,0) + log(1+exp(-|x|))`; the single
/// unconditional `exp(-|x|)` is always in `(0, 1]` and cannot overflow.
#[inline]
pub fn log1pexp(x: f64) -> f64 {
    let e = (-x.abs()).exp();
    x.max(0.0) + e.ln_1p()
}

/// Raw moments `E[X^n]` for `n = 1..=4` turned into
/// `(mean, variance, skewness, kurtosis excess)`.
///
/// Shared by the mixture laws whose raw moments have closed forms.
pub fn central_from_raw(m1: f64, m2: f64, m3: f64, m4: f64) -> (f64, f64, f64, f64) {
    let var = m2 - m1 * m1;
    let mu3 = m3 - 3.0 * m1 * m2 + 2.0 * m1 * m1 * m1;
    let mu4 = m4 - 4.0 * m1 * m3 + 6.0 * m1 * m1 * m2 - 3.0 * m1 * m1 * m1 * m1;
    let skew = mu3 / var.powf(1.5);
    let kurt_excess = mu4 / (var * var) - 3.0;
    (m1, var, skew, kurt_excess)
}

/// Quantile by bracket expansion plus bisection on a monotone CDF.
///
/// `lo`/`hi` seed the bracket; either side is pushed outward (doubling)
/// until it encloses `p`. Used by the families whose CDF has no
/// closed-form inverse (mixtures, non-central and stable laws).
pub fn bisect_quantile<F: Fn(f64) -> f64>(cdf: F, p: f64, mut lo: f64, mut hi: f64) -> f64 {
    debug_assert!(lo < hi);
    let mut guard = 0;
    while cdf(hi) < p && guard < 1024 {
        let w = hi - lo;
        hi += w;
        guard += 1;
    }
    guard = 0;
    while cdf(lo) > p && guard < 1024 {
        let w = hi - lo;
        lo -= w;
        guard += 1;
    }
    for _ in 0..200 {
        let m = 0.5 * (lo + hi);
        if !(m > lo && m < hi) {
            break; // interval exhausted at f64 resolution
        }
        if cdf(m) < p {
            lo = m;
        } else {
            hi = m;
        }
    }
    0.5 * (lo + hi)
}
