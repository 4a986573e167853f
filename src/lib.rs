//! Heuristic secondary-structure fractions from circular dichroism mean residue
//! ellipticity at 208, 217 and 195 nm.
//!
//! The estimate is a trend indicator: readings are scaled by their absolute sum,
//! sign-clamped into helix, sheet and coil contributions, turn takes the
//! remainder, and the four values are renormalized to sum to one.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::fractions::{StructureClass, StructureFractions};
pub use model::params::{EstimatorParams, NonFinitePolicy};
pub use model::reading::{EllipticityReading, Wavelength};
pub use pipeline::stage1_estimate::{EstimateError, estimate, estimate_with};
