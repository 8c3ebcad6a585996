use serde::{Deserialize, Serialize};

/// Environment variable naming the reference store used by [`XrayDb::from_env`].
///
/// [`XrayDb::from_env`]: crate::XrayDb::from_env
pub const STORE_PATH_VAR: &str = "XRAYDB_PATH";

/// Tunables of an [`XrayDb`](crate::XrayDb) handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XrayDbConfig {
    pub chantler: ChantlerConfig,
}

/// Windowing and f1 interpolation policy for the Chantler tables.
///
/// A request spanning `[emin, emax]` is evaluated over the tabulated samples
/// `energy[i_lo - window_below .. i_hi + window_above)`, where `i_lo` and
/// `i_hi` are the last samples at or below `emin` and `emax`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChantlerConfig {
    pub window_below: usize,
    pub window_above: usize,
    /// Samples kept on each side of the range in `chantler_energies`.
    pub energy_margin: usize,
    pub f1: F1Interpolation,
}

impl Default for ChantlerConfig {
    fn default() -> Self {
        Self {
            window_below: 5,
            window_above: 6,
            energy_margin: 2,
            f1: F1Interpolation::default(),
        }
    }
}

/// How f1, which changes sign, is evaluated inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum F1Interpolation {
    /// Cubic smoothing spline whose summed squared residual is at most `factor`.
    Smoothing { factor: f64 },
    /// Piecewise-linear interpolation.
    Linear,
}

impl Default for F1Interpolation {
    fn default() -> Self {
        Self::Smoothing { factor: 1.0 }
    }
}
