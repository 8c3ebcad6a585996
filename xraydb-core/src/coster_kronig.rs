use crate::db::XrayDb;
use crate::element::ElementId;
use crate::error::{Result, XrayDbError};
use crate::labels::title_case;

impl XrayDb {
    /// Returns Coster-Kronig transition probability.
    ///
    /// If `total` is true, returns the total transition probability
    /// (including via intermediate states). Otherwise returns the
    /// direct transition probability. Level labels are case-insensitive.
    pub fn ck_probability<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
        initial: &str,
        final_level: &str,
        total: bool,
    ) -> Result<f64> {
        let sym = self.symbol(element)?;
        let (from, to) = (title_case(initial), title_case(final_level));
        let record = self
            .raw()
            .coster_kronig
            .iter()
            .find(|ck| ck.element == sym && ck.initial_level == from && ck.final_level == to)
            .ok_or_else(|| XrayDbError::UnknownTransition {
                element: sym.to_string(),
                initial: initial.to_string(),
                final_level: final_level.to_string(),
            })?;

        if total {
            Ok(record.total_transition_probability)
        } else {
            Ok(record.transition_probability)
        }
    }
}
