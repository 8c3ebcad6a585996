use crate::error::{Result, XrayDbError};

/// Cubic spline interpolation using pre-computed second derivatives (Elam method).
///
/// This is the core interpolation used for all Elam photoabsorption and
/// scattering cross-section lookups. Points outside `[xin[0], xin[n-1]]`
/// are held at the boundary value instead of being extrapolated.
///
/// # Arguments
/// * `xin` - Tabulated x values (must be strictly increasing)
/// * `yin` - Tabulated y values
/// * `yspl` - Second derivatives of y at each `xin`
/// * `xout` - Points to evaluate at
///
/// # Errors
/// [`XrayDbError::NonIncreasing`] if an interval used for evaluation has
/// non-positive width.
pub fn elam_spline(xin: &[f64], yin: &[f64], yspl: &[f64], xout: &[f64]) -> Result<Vec<f64>> {
    let (Some(&xmin), Some(&xmax)) = (xin.first(), xin.last()) else {
        return Err(XrayDbError::DataError(
            "spline table needs at least two points".to_string(),
        ));
    };
    if xin.len() < 2 || yin.len() != xin.len() || yspl.len() != xin.len() {
        return Err(XrayDbError::DataError(format!(
            "spline table columns disagree: {} x, {} y, {} y''",
            xin.len(),
            yin.len(),
            yspl.len()
        )));
    }

    xout.iter()
        .map(|&x| {
            let x = x.max(xmin).min(xmax);
            let (lo, hi) = bracket(xin, x);
            cubic_segment(xin, yin, yspl, lo, hi, x)
        })
        .collect()
}

/// Index pair `(lo, hi = lo + 1)` of the interval holding `x`, with
/// `xin[lo] < x <= xin[hi]`; the first interval for `x <= xin[0]`.
pub(crate) fn bracket(xin: &[f64], x: f64) -> (usize, usize) {
    let hi = match xin.partition_point(|&v| v < x) {
        0 => 1,
        i if i >= xin.len() => xin.len() - 1,
        i => i,
    };
    (hi - 1, hi)
}

/// Evaluates the cubic on `[xin[lo], xin[hi]]` fixed by the end values and
/// end second derivatives.
pub(crate) fn cubic_segment(
    xin: &[f64],
    yin: &[f64],
    yspl: &[f64],
    lo: usize,
    hi: usize,
    x: f64,
) -> Result<f64> {
    let diff = xin[hi] - xin[lo];
    if !(diff > 0.0) {
        return Err(XrayDbError::NonIncreasing { index: lo });
    }

    let a = (xin[hi] - x) / diff;
    let b = (x - xin[lo]) / diff;

    Ok(a * yin[lo]
        + b * yin[hi]
        + (diff * diff / 6.0) * ((a * a - 1.0) * a * yspl[lo] + (b * b - 1.0) * b * yspl[hi]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spline_at_knot_points() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![1.0, 4.0, 9.0, 16.0, 25.0];
        let spl = vec![0.0; 5];

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let result = elam_spline(&x, &y, &spl, &[xi]).unwrap();
            assert!(
                (result[0] - yi).abs() < 1e-10,
                "at x={xi}: got {} expected {yi}",
                result[0]
            );
        }
    }

    #[test]
    fn test_spline_linear_interpolation() {
        // zero second derivatives reduce to linear interpolation
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![0.0, 1.0, 2.0];
        let spl = vec![0.0; 3];

        let result = elam_spline(&x, &y, &spl, &[0.5, 1.5]).unwrap();
        assert!((result[0] - 0.5).abs() < 1e-10);
        assert!((result[1] - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_spline_reproduces_cubic() {
        // exact second derivatives of x^3 make every segment exact
        let x: Vec<f64> = (0..6).map(|i| i as f64 * 0.7).collect();
        let y: Vec<f64> = x.iter().map(|v| v * v * v).collect();
        let spl: Vec<f64> = x.iter().map(|v| 6.0 * v).collect();

        let probes = [0.1, 0.35, 1.2, 2.05, 3.3];
        let result = elam_spline(&x, &y, &spl, &probes).unwrap();
        for (p, r) in probes.iter().zip(result.iter()) {
            assert!((r - p * p * p).abs() < 1e-9, "x={p}: {r}");
        }
    }

    #[test]
    fn test_spline_holds_boundary_values() {
        let x = vec![1.0, 2.0, 3.0];
        let y = vec![5.0, 7.0, 4.0];
        let spl = vec![0.0, -3.0, 0.0];

        let result = elam_spline(&x, &y, &spl, &[-10.0, 1.0, 3.0, 42.0]).unwrap();
        assert_eq!(result, vec![5.0, 5.0, 4.0, 4.0]);
    }

    #[test]
    fn test_spline_rejects_non_increasing_interval() {
        let x = vec![1.0, 2.0, 2.0, 3.0];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        let spl = vec![0.0; 4];

        // between the duplicated knots and the next one there is no problem
        assert!(elam_spline(&x, &y, &spl, &[2.5]).is_ok());

        let x = vec![3.0, 2.0, 1.0];
        let err = elam_spline(&x, &y[..3], &spl[..3], &[2.5]).unwrap_err();
        assert!(matches!(err, XrayDbError::NonIncreasing { .. }));
    }

    #[test]
    fn test_spline_rejects_mismatched_columns() {
        let err = elam_spline(&[1.0, 2.0], &[1.0], &[0.0, 0.0], &[1.5]).unwrap_err();
        assert!(matches!(err, XrayDbError::DataError(_)));
    }
}
