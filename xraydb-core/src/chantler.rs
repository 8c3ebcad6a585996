use std::ops::Range;

use tracing::trace;
use xraydb_store::ChantlerRecord;

use crate::config::{ChantlerConfig, F1Interpolation};
use crate::db::XrayDb;
use crate::element::ElementId;
use crate::error::{Result, XrayDbError};
use crate::interp::{interp, interp_loglog};
use crate::points::{Points, check_energies};
use crate::smoothing::SmoothingSpline;

/// Kind of Chantler cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChantlerKind {
    #[default]
    Total,
    Photo,
    Incoherent,
}

impl ChantlerKind {
    /// Maps the `photo` / `incoh` flag pair onto a kind: photo wins, then
    /// incoherent, otherwise total.
    pub fn from_flags(photo: bool, incoh: bool) -> Self {
        if photo {
            Self::Photo
        } else if incoh {
            Self::Incoherent
        } else {
            Self::Total
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    F1,
    F2,
    Mu(ChantlerKind),
}

impl Column {
    fn name(self) -> &'static str {
        match self {
            Column::F1 => "f1",
            Column::F2 => "f2",
            Column::Mu(ChantlerKind::Total) => "mu_total",
            Column::Mu(ChantlerKind::Photo) => "mu_photo",
            Column::Mu(ChantlerKind::Incoherent) => "mu_incoh",
        }
    }

    fn values(self, row: &ChantlerRecord) -> &[f64] {
        match self {
            Column::F1 => &row.f1,
            Column::F2 => &row.f2,
            Column::Mu(ChantlerKind::Total) => &row.mu_total,
            Column::Mu(ChantlerKind::Photo) => &row.mu_photo,
            Column::Mu(ChantlerKind::Incoherent) => &row.mu_incoh,
        }
    }
}

impl XrayDb {
    fn chantler_record<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<&ChantlerRecord> {
        let sym = self.symbol(element)?;
        self.chantler_by_symbol(sym)
            .ok_or_else(|| XrayDbError::MissingTable {
                table: "Chantler",
                element: sym.to_string(),
            })
    }

    /// Stored energy grid of a row: at least two samples, strictly increasing.
    fn chantler_grid(row: &ChantlerRecord) -> Result<&[f64]> {
        let te = &row.energy;
        if te.len() < 2 {
            return Err(XrayDbError::malformed(
                "Chantler",
                &row.element,
                format_args!("{} energy samples", te.len()),
            ));
        }
        if let Some(index) = te.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(XrayDbError::malformed(
                "Chantler",
                &row.element,
                format_args!("energy grid not increasing at sample {index}"),
            ));
        }
        Ok(te)
    }

    /// Returns tabulated energy points for Chantler data for an element.
    ///
    /// The grid between `emin` and `emax` (eV) is returned with a margin of
    /// `energy_margin` extra samples on each side that lies inside the table.
    pub fn chantler_energies<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
        emin: Option<f64>,
        emax: Option<f64>,
    ) -> Result<Vec<f64>> {
        let row = self.chantler_record(element)?;
        let te = Self::chantler_grid(row)?;
        let (first, last) = (te[0], te[te.len() - 1]);
        let emin = emin.unwrap_or(0.0);
        let emax = emax.unwrap_or(1e9);
        let margin = self.config().chantler.energy_margin;

        let start = if emin <= first {
            0
        } else {
            last_at_or_below(te, emin).saturating_sub(margin)
        };
        let end = if emax > last {
            te.len()
        } else {
            last_at_or_below(te, emax)
                .saturating_add(margin)
                .min(te.len())
        };
        Ok(te.get(start..end).map(<[f64]>::to_vec).unwrap_or_default())
    }

    /// Returns f1, the real part of the anomalous X-ray scattering factor (Chantler).
    ///
    /// f1 changes sign, so it is fitted with a smoothing spline over the local
    /// window (or interpolated linearly, per configuration).
    pub fn f1_chantler<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
    ) -> Result<E::Output> {
        let row = self.chantler_record(element)?;
        let values = self.chantler_values(row, energies.values(), Column::F1)?;
        Ok(E::collect(values))
    }

    /// Returns f2, the imaginary part of the anomalous X-ray scattering factor (Chantler).
    ///
    /// Uses log-log linear interpolation.
    pub fn f2_chantler<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
    ) -> Result<E::Output> {
        let row = self.chantler_record(element)?;
        let values = self.chantler_values(row, energies.values(), Column::F2)?;
        Ok(E::collect(values))
    }

    /// Returns X-ray mass attenuation coefficient (mu/rho) in cm²/g (Chantler).
    ///
    /// Uses log-log linear interpolation.
    pub fn mu_chantler<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
        kind: ChantlerKind,
    ) -> Result<E::Output> {
        let row = self.chantler_record(element)?;
        let values = self.chantler_values(row, energies.values(), Column::Mu(kind))?;
        Ok(E::collect(values))
    }

    fn chantler_values(
        &self,
        row: &ChantlerRecord,
        energies: &[f64],
        column: Column,
    ) -> Result<Vec<f64>> {
        check_energies(energies)?;
        let te = Self::chantler_grid(row)?;
        let ty = column.values(row);
        if ty.len() != te.len() {
            return Err(XrayDbError::malformed(
                "Chantler",
                &row.element,
                format_args!("{} energies, {} {} values", te.len(), ty.len(), column.name()),
            ));
        }
        if energies.is_empty() {
            return Ok(Vec::new());
        }

        let clamped = clamp_energies(energies, te[0], te[te.len() - 1]);
        let window = select_window(te, &clamped, &self.config().chantler);
        trace!(
            element = %row.element,
            column = column.name(),
            start = window.start,
            end = window.end,
            "chantler window"
        );
        let (wx, wy) = (&te[window.clone()], &ty[window]);

        match (column, self.config().chantler.f1) {
            (Column::F1, F1Interpolation::Smoothing { factor }) => {
                let spline = SmoothingSpline::fit(wx, wy, factor)?;
                clamped.iter().map(|&e| spline.evaluate(e)).collect()
            }
            (Column::F1, F1Interpolation::Linear) => Ok(interp(&clamped, wx, wy)),
            _ => Ok(interp_loglog(&clamped, wx, &safe_for_log(wy))),
        }
    }
}

/// Index of the last sample at or below `e` (0 when every sample is above).
fn last_at_or_below(te: &[f64], e: f64) -> usize {
    te.partition_point(|&t| t <= e).saturating_sub(1)
}

/// Local fitting window around the requested energies, at least two samples.
fn select_window(te: &[f64], energies: &[f64], config: &ChantlerConfig) -> Range<usize> {
    let emin = energies.iter().copied().fold(f64::INFINITY, f64::min);
    let emax = energies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let n = te.len();

    let start = last_at_or_below(te, emin).saturating_sub(config.window_below);
    let end = last_at_or_below(te, emax)
        .saturating_add(config.window_above)
        .max(start + 2)
        .min(n);
    let start = start.min(end.saturating_sub(2));
    start..end
}

#[inline]
fn clamp_energies(energies: &[f64], emin: f64, emax: f64) -> Vec<f64> {
    energies.iter().map(|&e| e.clamp(emin, emax)).collect()
}

#[inline]
fn safe_for_log(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v.abs() < 1e-99 { 1e-99 } else { v })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<f64> {
        (0..30).map(|i| 1000.0 + 100.0 * i as f64).collect()
    }

    #[test]
    fn test_window_pads_below_and_above() {
        let te = grid();
        let w = select_window(&te, &[2000.0, 2250.0], &ChantlerConfig::default());
        // 2000 is sample 10, 2250 falls after sample 12
        assert_eq!(w, 5..18);
    }

    #[test]
    fn test_window_clipped_to_table() {
        let te = grid();
        let w = select_window(&te, &[1000.0], &ChantlerConfig::default());
        assert_eq!(w, 0..6);
        let w = select_window(&te, &[3900.0], &ChantlerConfig::default());
        assert_eq!(w, 24..30);
    }

    #[test]
    fn test_window_has_two_samples() {
        let te = grid();
        let config = ChantlerConfig {
            window_below: 0,
            window_above: 0,
            ..ChantlerConfig::default()
        };
        let w = select_window(&te, &[3900.0], &config);
        assert_eq!(w, 28..30);
        let w = select_window(&te, &[1500.0], &config);
        assert_eq!(w, 5..7);
    }

    #[test]
    fn test_window_saturates_huge_padding() {
        let te = grid();
        let config = ChantlerConfig {
            window_below: usize::MAX,
            window_above: usize::MAX,
            ..ChantlerConfig::default()
        };
        assert_eq!(select_window(&te, &[2000.0], &config), 0..30);
    }

    #[test]
    fn test_kind_from_flags() {
        assert_eq!(ChantlerKind::from_flags(false, false), ChantlerKind::Total);
        assert_eq!(ChantlerKind::from_flags(true, true), ChantlerKind::Photo);
        assert_eq!(ChantlerKind::from_flags(false, true), ChantlerKind::Incoherent);
    }
}
