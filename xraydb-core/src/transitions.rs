use std::collections::{HashMap, HashSet};

use xraydb_store::XrayLevelRecord;

use crate::db::XrayDb;
use crate::element::ElementId;
use crate::error::{Result, XrayDbError};
use crate::labels::title_case;

/// X-ray absorption edge data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrayEdge {
    /// Edge energy in eV.
    pub energy: f64,
    pub fluorescence_yield: f64,
    pub jump_ratio: f64,
}

impl From<&XrayLevelRecord> for XrayEdge {
    fn from(level: &XrayLevelRecord) -> Self {
        XrayEdge {
            energy: level.absorption_edge,
            fluorescence_yield: level.fluorescence_yield,
            jump_ratio: level.jump_ratio,
        }
    }
}

/// X-ray emission line data.
#[derive(Debug, Clone, PartialEq)]
pub struct XrayLine {
    /// Emission energy in eV.
    pub energy: f64,
    pub intensity: f64,
    pub iupac_symbol: String,
    pub initial_level: String,
    pub final_level: String,
}

const DEFAULT_GUESS_EDGES: [&str; 5] = ["K", "L3", "L2", "L1", "M5"];

impl XrayDb {
    fn levels_of<'s>(&'s self, sym: &'s str) -> impl Iterator<Item = &'s XrayLevelRecord> + 's {
        self.raw()
            .xray_levels
            .iter()
            .filter(move |level| level.element == sym)
    }

    /// Returns a map of all X-ray absorption edges for an element.
    ///
    /// Keys are IUPAC edge labels (K, L1, L2, L3, M1, ...).
    pub fn xray_edges<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
    ) -> Result<HashMap<String, XrayEdge>> {
        let sym = self.symbol(element)?;
        Ok(self
            .levels_of(sym)
            .map(|level| (level.iupac_symbol.clone(), XrayEdge::from(level)))
            .collect())
    }

    /// Returns data for a specific X-ray edge. The label is case-insensitive.
    pub fn xray_edge<'a>(&self, element: impl Into<ElementId<'a>>, edge: &str) -> Result<XrayEdge> {
        let sym = self.symbol(element)?;
        let label = title_case(edge);
        self.levels_of(sym)
            .find(|level| level.iupac_symbol == label)
            .map(XrayEdge::from)
            .ok_or_else(|| XrayDbError::UnknownEdge {
                element: sym.to_string(),
                edge: edge.to_string(),
            })
    }

    /// Returns a map of X-ray emission lines for an element.
    ///
    /// Keys are Siegbahn notation (Ka1, Ka2, Kb1, La1, ...).
    /// If `initial_levels` is provided, returns only lines starting from one
    /// of those levels. If `excitation_energy` is provided it takes
    /// precedence: only lines whose initial level has an edge energy strictly
    /// below the excitation energy are returned.
    pub fn xray_lines<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
        initial_levels: Option<&[&str]>,
        excitation_energy: Option<f64>,
    ) -> Result<HashMap<String, XrayLine>> {
        let sym = self.symbol(element)?;

        let allowed: Option<HashSet<String>> = match (excitation_energy, initial_levels) {
            (Some(max_energy), _) => Some(
                self.levels_of(sym)
                    .filter(|level| level.absorption_edge < max_energy)
                    .map(|level| title_case(&level.iupac_symbol))
                    .collect(),
            ),
            (None, Some(levels)) => Some(levels.iter().map(|l| title_case(l)).collect()),
            (None, None) => None,
        };

        let lines = self
            .raw()
            .xray_transitions
            .iter()
            .filter(|trans| trans.element == sym)
            .filter(|trans| {
                allowed
                    .as_ref()
                    .is_none_or(|set| set.contains(&trans.initial_level))
            })
            .map(|trans| {
                (
                    trans.siegbahn_symbol.clone(),
                    XrayLine {
                        energy: trans.emission_energy,
                        intensity: trans.intensity,
                        iupac_symbol: trans.iupac_symbol.clone(),
                        initial_level: trans.initial_level.clone(),
                        final_level: trans.final_level.clone(),
                    },
                )
            })
            .collect();
        Ok(lines)
    }

    /// Guess the element and edge from an X-ray energy.
    ///
    /// Returns (element_symbol, edge_label) for the closest match among
    /// `edges` (default K, L3, L2, L1, M5).
    pub fn guess_edge(&self, energy: f64, edges: Option<&[&str]>) -> Option<(String, String)> {
        let edge_filter = edges.unwrap_or(&DEFAULT_GUESS_EDGES);

        self.raw()
            .xray_levels
            .iter()
            .filter(|level| level.absorption_edge > 0.0)
            .filter(|level| edge_filter.contains(&level.iupac_symbol.as_str()))
            .min_by(|a, b| {
                let da = (a.absorption_edge - energy).abs();
                let db = (b.absorption_edge - energy).abs();
                da.total_cmp(&db)
            })
            .map(|level| (level.element.clone(), level.iupac_symbol.clone()))
    }
}
