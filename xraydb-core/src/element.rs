use std::fmt;

use crate::db::XrayDb;
use crate::error::{Result, XrayDbError};

/// Identifier accepted wherever an element is expected: an atomic number,
/// or a string holding a symbol, an atomic number, or an element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementId<'a> {
    Z(u16),
    Label(&'a str),
}

impl From<u16> for ElementId<'_> {
    fn from(z: u16) -> Self {
        ElementId::Z(z)
    }
}

impl From<u8> for ElementId<'_> {
    fn from(z: u8) -> Self {
        ElementId::Z(z.into())
    }
}

// Out-of-range integers map to Z = 0, which never resolves.
impl From<i32> for ElementId<'_> {
    fn from(z: i32) -> Self {
        ElementId::Z(u16::try_from(z).unwrap_or(0))
    }
}

impl From<u32> for ElementId<'_> {
    fn from(z: u32) -> Self {
        ElementId::Z(u16::try_from(z).unwrap_or(0))
    }
}

impl From<usize> for ElementId<'_> {
    fn from(z: usize) -> Self {
        ElementId::Z(u16::try_from(z).unwrap_or(0))
    }
}

impl<'a> From<&'a str> for ElementId<'a> {
    fn from(label: &'a str) -> Self {
        ElementId::Label(label)
    }
}

impl<'a> From<&'a String> for ElementId<'a> {
    fn from(label: &'a String) -> Self {
        ElementId::Label(label.as_str())
    }
}

impl fmt::Display for ElementId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Z(z) => write!(f, "{z}"),
            ElementId::Label(label) => f.write_str(label),
        }
    }
}

/// Canonical element record.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub atomic_number: u16,
    pub symbol: String,
    pub name: String,
    /// Molar mass in g/mol.
    pub molar_mass: f64,
    /// Density of the pure element in g/cm³.
    pub density: f64,
}

impl XrayDb {
    /// Resolve an element identifier to its atomic number.
    ///
    /// Integers must match an atomic number exactly. Strings are tried as an
    /// atomic number, then as a symbol, then as a name (both case-insensitive).
    pub fn resolve_element<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<u16> {
        let id = element.into();
        let z = match id {
            ElementId::Z(z) => self.element_by_z(z).map(|e| e.atomic_number),
            ElementId::Label(label) => {
                let label = label.trim();
                match label.parse::<u16>() {
                    Ok(z) => self.element_by_z(z).map(|e| e.atomic_number),
                    Err(_) => self.z_by_symbol(label).or_else(|| self.z_by_name(label)),
                }
            }
        };
        z.ok_or_else(|| XrayDbError::UnknownElement(id.to_string()))
    }

    pub(crate) fn element_record<'a>(
        &self,
        element: impl Into<ElementId<'a>>,
    ) -> Result<&xraydb_store::ElementRecord> {
        let id = element.into();
        let z = self.resolve_element(id)?;
        self.element_by_z(z)
            .ok_or_else(|| XrayDbError::UnknownElement(id.to_string()))
    }

    /// Returns the canonical record for an element.
    pub fn resolve<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<Element> {
        let rec = self.element_record(element)?;
        Ok(Element {
            atomic_number: rec.atomic_number,
            symbol: rec.symbol.clone(),
            name: rec.name.clone(),
            molar_mass: rec.molar_mass,
            density: rec.density,
        })
    }

    pub fn atomic_number<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<u16> {
        self.resolve_element(element)
    }

    pub fn symbol<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<&str> {
        Ok(&self.element_record(element)?.symbol)
    }

    pub fn atomic_name<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<&str> {
        Ok(&self.element_record(element)?.name)
    }

    pub fn molar_mass<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<f64> {
        Ok(self.element_record(element)?.molar_mass)
    }

    pub fn density<'a>(&self, element: impl Into<ElementId<'a>>) -> Result<f64> {
        Ok(self.element_record(element)?.density)
    }
}
