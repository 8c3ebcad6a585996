//! Cubic smoothing spline (Reinsch).
//!
//! Among all twice-differentiable `g`, finds the one minimizing `∫ g''²`
//! subject to `Σ (g(x_i) - y_i)² <= S`. With the banded system
//!
//! ```text
//! (QᵀQ + p R) u = Qᵀ y,   g = y - Q u,   g'' = p u
//! ```
//!
//! the residual `‖Q u‖²` falls monotonically as `p` grows, so `p` is found
//! by bisection in log space. `S = 0` gives the interpolating natural spline;
//! if the least-squares straight line already meets the budget it is returned.

use tracing::trace;

use crate::error::{Result, XrayDbError};
use crate::spline::{bracket, cubic_segment};

const MAX_EXPANSIONS: usize = 60;
const MAX_BISECTIONS: usize = 200;
const RELATIVE_TOLERANCE: f64 = 1e-10;

/// A fitted smoothing spline: smoothed knot values plus natural-spline
/// second derivatives.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingSpline {
    x: Vec<f64>,
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl SmoothingSpline {
    /// Fits `(x, y)` with residual budget `factor`.
    ///
    /// `x` must be strictly increasing; fewer than three points are
    /// interpolated linearly.
    pub fn fit(x: &[f64], y: &[f64], factor: f64) -> Result<Self> {
        if x.len() != y.len() || x.len() < 2 {
            return Err(XrayDbError::DataError(format!(
                "smoothing spline needs matching columns of at least two points, got {} x and {} y",
                x.len(),
                y.len()
            )));
        }
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        if let Some(index) = h.iter().position(|&d| !(d > 0.0)) {
            return Err(XrayDbError::NonIncreasing { index });
        }

        let n = x.len();
        if n < 3 {
            return Ok(Self {
                x: x.to_vec(),
                values: y.to_vec(),
                second_derivatives: vec![0.0; n],
            });
        }

        let system = BandedSystem::new(&h, y);
        let budget = factor.max(0.0);

        let straight = system.solve(0.0)?;
        let p = if straight.residual <= budget {
            0.0
        } else {
            system.find_smoothing_parameter(budget)?
        };
        let fit = if p == 0.0 { straight } else { system.solve(p)? };
        trace!(points = n, p, residual = fit.residual, "fitted smoothing spline");

        let mut second_derivatives = vec![0.0; n];
        for (j, u) in fit.u.iter().enumerate() {
            second_derivatives[j + 1] = p * u;
        }
        let values = y.iter().zip(fit.q_u.iter()).map(|(y, e)| y - e).collect();

        Ok(Self {
            x: x.to_vec(),
            values,
            second_derivatives,
        })
    }

    /// Evaluates the spline, holding boundary values outside the knots.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let n = self.x.len();
        let x = x.max(self.x[0]).min(self.x[n - 1]);
        let (lo, hi) = bracket(&self.x, x);
        cubic_segment(&self.x, &self.values, &self.second_derivatives, lo, hi, x)
    }

    /// Smoothed values at the knots.
    pub fn knot_values(&self) -> &[f64] {
        &self.values
    }
}

struct Solution {
    u: Vec<f64>,
    q_u: Vec<f64>,
    residual: f64,
}

/// `QᵀQ` (pentadiagonal), `R` (tridiagonal) and `Qᵀy` for interior knots.
struct BandedSystem {
    h: Vec<f64>,
    qtq: [Vec<f64>; 3],
    r: [Vec<f64>; 2],
    qty: Vec<f64>,
}

impl BandedSystem {
    fn new(h: &[f64], y: &[f64]) -> Self {
        let m = h.len() - 1;
        // column j of Q has entries at rows j, j+1, j+2
        let col = |j: usize| {
            let (a, b) = (1.0 / h[j], 1.0 / h[j + 1]);
            [a, -a - b, b]
        };

        let mut d0 = vec![0.0; m];
        let mut d1 = vec![0.0; m.saturating_sub(1)];
        let mut d2 = vec![0.0; m.saturating_sub(2)];
        let mut r0 = vec![0.0; m];
        let mut r1 = vec![0.0; m.saturating_sub(1)];
        let mut qty = vec![0.0; m];

        for j in 0..m {
            let q = col(j);
            d0[j] = q[0] * q[0] + q[1] * q[1] + q[2] * q[2];
            if j + 1 < m {
                let next = col(j + 1);
                d1[j] = q[1] * next[0] + q[2] * next[1];
                r1[j] = h[j + 1] / 6.0;
            }
            if j + 2 < m {
                d2[j] = q[2] * col(j + 2)[0];
            }
            r0[j] = (h[j] + h[j + 1]) / 3.0;
            qty[j] = q[0] * y[j] + q[1] * y[j + 1] + q[2] * y[j + 2];
        }

        Self {
            h: h.to_vec(),
            qtq: [d0, d1, d2],
            r: [r0, r1],
            qty,
        }
    }

    fn solve(&self, p: f64) -> Result<Solution> {
        let [d0, d1, d2] = &self.qtq;
        let [r0, r1] = &self.r;
        let a0: Vec<f64> = d0.iter().zip(r0).map(|(d, r)| d + p * r).collect();
        let a1: Vec<f64> = d1.iter().zip(r1).map(|(d, r)| d + p * r).collect();
        let u = solve_pentadiagonal(&a0, &a1, d2, &self.qty)?;

        let n = self.h.len() + 1;
        let mut q_u = vec![0.0; n];
        for (j, &uj) in u.iter().enumerate() {
            let (a, b) = (1.0 / self.h[j], 1.0 / self.h[j + 1]);
            q_u[j] += a * uj;
            q_u[j + 1] += (-a - b) * uj;
            q_u[j + 2] += b * uj;
        }
        let residual = q_u.iter().map(|e| e * e).sum();

        Ok(Solution { u, q_u, residual })
    }

    fn find_smoothing_parameter(&self, budget: f64) -> Result<f64> {
        let trace_qtq: f64 = self.qtq[0].iter().sum();
        let trace_r: f64 = self.r[0].iter().sum();
        let scale = trace_qtq / trace_r;

        let mut lo = scale * 1e-12;
        if self.solve(lo)?.residual <= budget {
            return Ok(lo);
        }
        let mut hi = scale;
        let mut expansions = 0;
        while self.solve(hi)?.residual > budget {
            lo = hi;
            hi *= 10.0;
            expansions += 1;
            if expansions >= MAX_EXPANSIONS {
                return Ok(hi);
            }
        }

        for _ in 0..MAX_BISECTIONS {
            if hi / lo - 1.0 < RELATIVE_TOLERANCE {
                break;
            }
            let mid = (lo * hi).sqrt();
            if self.solve(mid)?.residual > budget {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(hi)
    }
}

/// Solves a symmetric positive-definite pentadiagonal system by banded
/// Cholesky factorization. `d0` is the diagonal, `d1` and `d2` the first and
/// second super-diagonals.
fn solve_pentadiagonal(d0: &[f64], d1: &[f64], d2: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    let m = d0.len();
    let mut l0 = vec![0.0; m];
    let mut l1 = vec![0.0; m];
    let mut l2 = vec![0.0; m];

    for i in 0..m {
        if i >= 2 {
            l2[i] = d2[i - 2] / l0[i - 2];
        }
        if i >= 1 {
            let coupling = if i >= 2 { l2[i] * l1[i - 1] } else { 0.0 };
            l1[i] = (d1[i - 1] - coupling) / l0[i - 1];
        }
        let pivot = d0[i] - l1[i] * l1[i] - l2[i] * l2[i];
        if !(pivot > 0.0) {
            return Err(XrayDbError::DataError(format!(
                "smoothing system is not positive definite at row {i}"
            )));
        }
        l0[i] = pivot.sqrt();
    }

    let mut z = vec![0.0; m];
    for i in 0..m {
        let mut s = rhs[i];
        if i >= 1 {
            s -= l1[i] * z[i - 1];
        }
        if i >= 2 {
            s -= l2[i] * z[i - 2];
        }
        z[i] = s / l0[i];
    }

    let mut x = vec![0.0; m];
    for i in (0..m).rev() {
        let mut s = z[i];
        if i + 1 < m {
            s -= l1[i + 1] * x[i + 1];
        }
        if i + 2 < m {
            s -= l2[i + 2] * x[i + 2];
        }
        x[i] = s / l0[i];
    }
    Ok(x)
}
