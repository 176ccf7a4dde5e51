//! dyeratio - mole ratio calculator for oxidative hair dye formulations
//!
//! Pick precursors and couplers from a fixed catalog, give their masses, and
//! get the total moles per group, the coupler/precursor ratio and a heuristic
//! shade prediction.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    calculator::{ChartPoint, FormulationResult, Shade, compute_result},
    catalog::{Compound, Role, StaticCatalog},
    formulation::{Formulation, Grams, GramsError, LineEntry},
    session::Session,
    traits::CatalogProvider,
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
