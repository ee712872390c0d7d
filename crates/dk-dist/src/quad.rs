//! Adaptive Simpson quadrature.
//!
//! The stable-law evaluator needs a numeric integrator for its
//! characteristic-function inversion integrals. The integrands are smooth
//! with a decaying envelope and mild oscillation, so recursive Simpson
//! with an absolute-error budget is plenty.

/// Simpson's rule on `[a, b]` given the three endpoint/midpoint values.
#[inline]
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn adaptive<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> f64 {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    if depth == 0 || delta.abs() <= 15.0 * tol {
        // Richardson correction on the accepted panel.
        return left + right + delta / 15.0;
    }
    adaptive(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)
        + adaptive(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)
}

/// Integrate `f` over `[a, b]` to absolute tolerance `tol`.
///
/// Recursion depth is capped; on pathological integrands the best
/// available estimate is returned rather than recursing unboundedly.
pub fn integrate<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, tol: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    // Seed with a fixed split so an integrand that vanishes at the three
    // initial sample points does not get accepted immediately.
    let n = 16;
    let h = (b - a) / n as f64;
    let mut total = 0.0;
    for i in 0..n {
        let lo = a + i as f64 * h;
        let hi = lo + h;
        let mid = 0.5 * (lo + hi);
        let (flo, fmid, fhi) = (f(lo), f(mid), f(hi));
        let whole = simpson(lo, hi, flo, fmid, fhi);
        total += adaptive(&f, lo, hi, flo, fmid, fhi, whole, tol / n as f64, 48);
    }
    total
}
