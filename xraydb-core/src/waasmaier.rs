use std::fmt;

use xraydb_store::WaasmaierRecord;

use crate::db::XrayDb;
use crate::error::{Result, XrayDbError};
use crate::labels::title_case;
use crate::points::Points;

/// Number of Gaussian terms in the Waasmaier-Kirfel parameterization.
pub const WAASMAIER_TERMS: usize = 5;

/// Ion selector for [`XrayDb::f0`]: an ion label such as `"Fe2+"`, or an
/// atomic number selecting the neutral atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IonId<'a> {
    Z(u16),
    Label(&'a str),
}

impl From<u16> for IonId<'_> {
    fn from(z: u16) -> Self {
        IonId::Z(z)
    }
}

impl From<i32> for IonId<'_> {
    fn from(z: i32) -> Self {
        IonId::Z(u16::try_from(z).unwrap_or(0))
    }
}

impl<'a> From<&'a str> for IonId<'a> {
    fn from(label: &'a str) -> Self {
        IonId::Label(label)
    }
}

impl<'a> From<&'a String> for IonId<'a> {
    fn from(label: &'a String) -> Self {
        IonId::Label(label.as_str())
    }
}

impl fmt::Display for IonId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IonId::Z(z) => write!(f, "Z={z}"),
            IonId::Label(label) => f.write_str(label),
        }
    }
}

impl XrayDb {
    /// Returns list of supported ion names for f0 calculations.
    ///
    /// If `element` is provided (symbol, name or atomic number as text),
    /// returns only ions for that element.
    pub fn f0_ions(&self, element: Option<&str>) -> Result<Vec<&str>> {
        let ions: Vec<&str> = match element {
            Some(elem) => {
                let sym = self.symbol(elem)?;
                self.raw()
                    .waasmaier
                    .iter()
                    .filter(|w| w.element == sym)
                    .map(|w| w.ion.as_str())
                    .collect()
            }
            None => self.raw().waasmaier.iter().map(|w| w.ion.as_str()).collect(),
        };
        Ok(ions)
    }

    /// Returns f0 elastic X-ray scattering factor for an ion at given q values.
    ///
    /// q = sin(theta) / lambda in Angstroms^-1.
    ///
    /// Formula: f0(q) = c + sum_i(a_i * exp(-b_i * q^2))
    /// where c = offset, a_i = scale, b_i = exponents.
    pub fn f0<'a, Q: Points>(&self, ion: impl Into<IonId<'a>>, q: Q) -> Result<Q::Output> {
        let record = self.waasmaier_record(ion.into())?;
        if record.scale.len() != WAASMAIER_TERMS || record.exponents.len() != WAASMAIER_TERMS {
            return Err(XrayDbError::malformed(
                "Waasmaier",
                &record.ion,
                format_args!(
                    "{} scale and {} exponent terms",
                    record.scale.len(),
                    record.exponents.len()
                ),
            ));
        }

        let values = q
            .values()
            .iter()
            .map(|&qi| {
                let q2 = qi * qi;
                let mut val = record.offset;
                for (a, b) in record.scale.iter().zip(record.exponents.iter()) {
                    val += a * (-b * q2).exp();
                }
                val
            })
            .collect();
        Ok(Q::collect(values))
    }

    fn waasmaier_record(&self, ion: IonId<'_>) -> Result<&WaasmaierRecord> {
        let table = &self.raw().waasmaier;
        let found = match ion {
            IonId::Label(label) => {
                let label = title_case(label);
                table.iter().find(|w| w.ion == label)
            }
            IonId::Z(z) => table
                .iter()
                .find(|w| w.atomic_number == z && w.ion == w.element)
                .or_else(|| table.iter().find(|w| w.atomic_number == z)),
        };
        found.ok_or_else(|| XrayDbError::UnknownIon(ion.to_string()))
    }
}
