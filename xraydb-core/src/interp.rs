//! Piecewise-linear interpolation over tabulated samples, in linear or
//! log-log space. Outside the table the boundary sample is held.

use crate::spline::bracket;

/// Interpolates `(xp, fp)` at each of `x`. `xp` must be increasing.
pub(crate) fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| linear_at(xi, xp, fp)).collect()
}

/// `exp(interp(ln x, ln xp, ln fp))`; `fp` must be positive.
pub(crate) fn interp_loglog(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    let log_xp: Vec<f64> = xp.iter().map(|v| v.ln()).collect();
    let log_fp: Vec<f64> = fp.iter().map(|v| v.ln()).collect();
    x.iter()
        .map(|v| linear_at(v.ln(), &log_xp, &log_fp).exp())
        .collect()
}

/// NaN for an empty table, the single value for a one-sample table.
fn linear_at(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    match n {
        0 => return f64::NAN,
        1 => return fp[0],
        _ => {}
    }
    let (xp, fp) = (&xp[..n], &fp[..n]);
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    let (lo, hi) = bracket(xp, x);
    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}
