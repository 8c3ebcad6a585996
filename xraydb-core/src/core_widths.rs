use crate::db::XrayDb;
use crate::error::Result;
use crate::labels::title_case;

/// Core-hole lifetime width of one level (Keski-Rahkonen & Krause).
#[derive(Debug, Clone, PartialEq)]
pub struct CoreHoleWidth {
    pub atomic_number: u16,
    pub element: String,
    pub edge: String,
    /// Width in eV.
    pub width: f64,
}

impl XrayDb {
    /// Returns core-hole widths in eV.
    ///
    /// `element` (symbol, name or atomic number as text) and `edge` each
    /// narrow the result when given; with neither, every tabulated width is
    /// returned. No match yields an empty list, but an unresolvable element
    /// is an error.
    pub fn corehole_width(
        &self,
        element: Option<&str>,
        edge: Option<&str>,
    ) -> Result<Vec<CoreHoleWidth>> {
        let z = element.map(|e| self.resolve_element(e)).transpose()?;
        let edge = edge.map(title_case);

        Ok(self
            .raw()
            .keski_rahkonen_krause
            .iter()
            .filter(|w| z.is_none_or(|z| w.atomic_number == z))
            .filter(|w| edge.as_ref().is_none_or(|e| &w.edge == e))
            .map(|w| CoreHoleWidth {
                atomic_number: w.atomic_number,
                element: w.element.clone(),
                edge: w.edge.clone(),
                width: w.width,
            })
            .collect())
    }
}
