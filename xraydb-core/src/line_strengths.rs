use std::collections::HashMap;

use tracing::debug;

use crate::db::XrayDb;
use crate::elam::CrossSectionKind;
use crate::element::ElementId;
use crate::error::Result;
use crate::labels::first_component;
use crate::transitions::XrayEdge;

/// Half-width of the energy window straddling an edge, relative to the edge energy.
const EDGE_STEP: f64 = 1e-3;

impl XrayDb {
    /// Returns the absolute fluorescence strength in cm²/g of every emission
    /// line, keyed by Siegbahn label.
    ///
    /// Each strength is the photoabsorption jump across the line's initial
    /// edge times the line intensity and the edge fluorescence yield.
    /// `excitation_energy` restricts lines as in [`XrayDb::xray_lines`].
    /// Lines whose initial level has no edge are left out.
    pub fn xray_line_strengths<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
        excitation_energy: Option<f64>,
    ) -> Result<HashMap<String, f64>> {
        let sym = self.symbol(element)?;
        let lines = self.xray_lines(sym, None, excitation_energy)?;

        let mut out = HashMap::with_capacity(lines.len());
        for (label, line) in lines {
            let Some(edge) = self.initial_edge(sym, &line.initial_level) else {
                debug!(element = sym, line = %label, level = %line.initial_level, "no edge for line");
                continue;
            };
            let mu = self.elam_values(
                sym,
                &[edge.energy * (1.0 - EDGE_STEP), edge.energy * (1.0 + EDGE_STEP)],
                CrossSectionKind::Photo,
            )?;
            out.insert(label, (mu[1] - mu[0]) * line.intensity * edge.fluorescence_yield);
        }
        Ok(out)
    }

    fn initial_edge(&self, sym: &str, level: &str) -> Option<XrayEdge> {
        self.xray_edge(sym, level)
            .ok()
            .or_else(|| first_component(level).and_then(|first| self.xray_edge(sym, first).ok()))
    }
}
