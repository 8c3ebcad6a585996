use std::str::FromStr;

use crate::db::XrayDb;
use crate::element::ElementId;
use crate::error::{Result, XrayDbError};
use crate::points::{Points, check_energies};
use crate::spline::elam_spline;

/// Kind of cross-section for Elam calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossSectionKind {
    Photo,
    Coherent,
    Incoherent,
    #[default]
    Total,
}

impl FromStr for CrossSectionKind {
    type Err = XrayDbError;

    fn from_str(kind: &str) -> Result<Self> {
        match kind.trim().to_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "coh" | "coherent" => Ok(Self::Coherent),
            "incoh" | "incoherent" => Ok(Self::Incoherent),
            "total" | "tot" => Ok(Self::Total),
            _ => Err(XrayDbError::UnknownKind(kind.to_string())),
        }
    }
}

/// One tabulated Elam curve: ln(E), ln(sigma) and its second derivatives.
struct ElamCurve<'a> {
    table: &'static str,
    element: &'a str,
    log_energy: &'a [f64],
    log_value: &'a [f64],
    spline: &'a [f64],
}

impl ElamCurve<'_> {
    /// Lowest energy (eV) the table is valid for.
    fn energy_floor(&self) -> f64 {
        let e0 = self.log_energy.first().map_or(0.0, |x| x.exp());
        10.0 * (0.102 * e0).round()
    }

    fn check_columns(&self) -> Result<()> {
        let n = self.log_energy.len();
        if n < 2 || self.log_value.len() != n || self.spline.len() != n {
            return Err(XrayDbError::malformed(
                self.table,
                self.element,
                format_args!(
                    "{} ln(E), {} ln(sigma), {} second derivatives",
                    n,
                    self.log_value.len(),
                    self.spline.len()
                ),
            ));
        }
        Ok(())
    }

    fn evaluate(&self, energies: &[f64]) -> Result<Vec<f64>> {
        self.check_columns()?;
        let floor = self.energy_floor();
        let log_en: Vec<f64> = energies.iter().map(|&e| e.max(floor).ln()).collect();
        let out = elam_spline(self.log_energy, self.log_value, self.spline, &log_en)?;
        Ok(out.into_iter().map(f64::exp).collect())
    }
}

impl XrayDb {
    /// Returns mass attenuation cross-section in cm²/g using Elam tables.
    ///
    /// `Total` sums photoabsorption, coherent and incoherent scattering;
    /// the other kinds return that single component.
    pub fn mu_elam<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
        kind: CrossSectionKind,
    ) -> Result<E::Output> {
        let sym = self.symbol(element)?;
        let values = self.elam_values(sym, energies.values(), kind)?;
        Ok(E::collect(values))
    }

    /// Returns a single Elam cross-section component in cm²/g.
    ///
    /// Energies below the table's floor are raised to it, and values outside
    /// the tabulated range hold the boundary value. `Total` is not a single
    /// tabulated curve and is rejected; use [`XrayDb::mu_elam`] for it.
    pub fn cross_section_elam<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
        kind: CrossSectionKind,
    ) -> Result<E::Output> {
        let sym = self.symbol(element)?;
        let curve = self.elam_curve(sym, kind)?;
        check_energies(energies.values())?;
        let values = curve.evaluate(energies.values())?;
        Ok(E::collect(values))
    }

    /// Returns the coherent (Rayleigh) scattering cross-section in cm²/g.
    pub fn coherent_cross_section_elam<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
    ) -> Result<E::Output> {
        self.mu_elam(element, energies, CrossSectionKind::Coherent)
    }

    /// Returns the incoherent (Compton) scattering cross-section in cm²/g.
    pub fn incoherent_cross_section_elam<'a, E: Points>(
        &self,
        element: impl Into<ElementId<'a>>,
        energies: E,
    ) -> Result<E::Output> {
        self.mu_elam(element, energies, CrossSectionKind::Incoherent)
    }

    pub(crate) fn elam_values(
        &self,
        sym: &str,
        energies: &[f64],
        kind: CrossSectionKind,
    ) -> Result<Vec<f64>> {
        check_energies(energies)?;
        match kind {
            CrossSectionKind::Total => {
                let photo = self.elam_curve(sym, CrossSectionKind::Photo)?.evaluate(energies)?;
                let coh = self
                    .elam_curve(sym, CrossSectionKind::Coherent)?
                    .evaluate(energies)?;
                let incoh = self
                    .elam_curve(sym, CrossSectionKind::Incoherent)?
                    .evaluate(energies)?;
                Ok(photo
                    .iter()
                    .zip(coh.iter())
                    .zip(incoh.iter())
                    .map(|((&p, &c), &i)| p + c + i)
                    .collect())
            }
            component => self.elam_curve(sym, component)?.evaluate(energies),
        }
    }

    fn elam_curve<'s>(&'s self, sym: &'s str, kind: CrossSectionKind) -> Result<ElamCurve<'s>> {
        match kind {
            CrossSectionKind::Photo => {
                let row = self
                    .photo_by_symbol(sym)
                    .ok_or_else(|| XrayDbError::MissingTable {
                        table: "photoabsorption",
                        element: sym.to_string(),
                    })?;
                Ok(ElamCurve {
                    table: "photoabsorption",
                    element: sym,
                    log_energy: &row.log_energy,
                    log_value: &row.log_photoabsorption,
                    spline: &row.log_photoabsorption_spline,
                })
            }
            CrossSectionKind::Coherent | CrossSectionKind::Incoherent => {
                let row = self
                    .scatter_by_symbol(sym)
                    .ok_or_else(|| XrayDbError::MissingTable {
                        table: "scattering",
                        element: sym.to_string(),
                    })?;
                let (log_value, spline) = if kind == CrossSectionKind::Coherent {
                    (&row.log_coherent_scatter, &row.log_coherent_scatter_spline)
                } else {
                    (&row.log_incoherent_scatter, &row.log_incoherent_scatter_spline)
                };
                Ok(ElamCurve {
                    table: "scattering",
                    element: sym,
                    log_energy: &row.log_energy,
                    log_value,
                    spline,
                })
            }
            CrossSectionKind::Total => Err(XrayDbError::UnknownKind(
                "total (not a single tabulated curve)".to_string(),
            )),
        }
    }
}
