//! Lookup and interpolation of X-ray reference data for the elements.
//!
//! [`XrayDb`] is a read-only handle on a decoded reference store. It resolves
//! elements, catalogs absorption edges and emission lines, and evaluates the
//! Elam, Chantler and Waasmaier-Kirfel tables at arbitrary energies or
//! momentum transfers.

pub mod chantler;
pub mod config;
pub mod core_widths;
pub mod coster_kronig;
pub mod db;
pub mod elam;
pub mod element;
pub mod error;
pub(crate) mod interp;
pub(crate) mod labels;
pub mod line_strengths;
pub mod points;
pub mod smoothing;
pub mod spline;
pub mod transitions;
pub mod waasmaier;

pub use chantler::ChantlerKind;
pub use config::{ChantlerConfig, F1Interpolation, STORE_PATH_VAR, XrayDbConfig};
pub use core_widths::CoreHoleWidth;
pub use db::XrayDb;
pub use elam::CrossSectionKind;
pub use element::{Element, ElementId};
pub use error::{ErrorCategory, Result, XrayDbError};
pub use points::Points;
pub use smoothing::SmoothingSpline;
pub use transitions::{XrayEdge, XrayLine};
pub use waasmaier::IonId;
pub use xraydb_store;
