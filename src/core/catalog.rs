//! Built-in compound catalog
//!
//! Oxidative dye intermediates with their molecular weights. The table is
//! static configuration data: the calculator never reads it directly, it only
//! sees the molecular weights copied into each line entry.

use crate::core::traits::CatalogProvider;
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Which side of the reaction a compound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Primary intermediate, oxidized by the developer
    Precursor,
    /// Secondary intermediate that reacts with the oxidized precursor
    Coupler,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Precursor => "Precursor",
            Role::Coupler => "Coupler",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compound {
    pub name: &'static str,
    pub role: Role,
    /// Grams per mole
    pub molecular_weight: f64,
    /// `#rrggbb`, only used for display
    pub display_color: &'static str,
}

const fn compound(
    name: &'static str,
    role: Role,
    molecular_weight: f64,
    display_color: &'static str,
) -> Compound {
    Compound {
        name,
        role,
        molecular_weight,
        display_color,
    }
}

const COMPOUNDS: &[Compound] = &[
    compound("p-Aminophenol", Role::Precursor, 109.13, "#9b5de5"),
    compound("TOLUENE-2,5-DIAMINE SULFATE", Role::Precursor, 220.25, "#f15bb5"),
    compound(
        "1-HYDROXYETHYL 4,5-DIAMINO PYRAZOLE SULFATE",
        Role::Precursor,
        240.23,
        "#fee440",
    ),
    compound(
        "N,N-BIS(2-HYDROXYETHYL)-P-PHENYLENEDIAMINE SULFATE",
        Role::Precursor,
        312.32,
        "#00bbf9",
    ),
    compound("m-Aminophenol", Role::Coupler, 109.13, "#00f5d4"),
    compound("Resorcinol", Role::Coupler, 110.11, "#9b5de5"),
    compound("2,4-Diaminophenoxyethanol HCl", Role::Coupler, 241.1, "#f15bb5"),
    compound("2-METHYLRESORCINOL", Role::Coupler, 124.15, "#fee440"),
    compound("4-CHLORORESORCINOL", Role::Coupler, 144.56, "#00bbf9"),
    compound(
        "2-METHYL-5-HYDROXYETHYLAMINOPHENOL",
        Role::Coupler,
        167.21,
        "#00f5d4",
    ),
    compound("4-AMINO-2-HYDROXYTOLUENE", Role::Coupler, 123.16, "#9b5de5"),
    compound(
        "2-AMINO-4-HYDROXYETHYLAMINOANISOLE SULFATE",
        Role::Coupler,
        279.27,
        "#f15bb5",
    ),
    compound("1-NAPHTHOL", Role::Coupler, 144.17, "#fee440"),
    compound("2,6-DIHYDROXYETHYLAMINOTOLUENE", Role::Coupler, 210.28, "#00bbf9"),
    compound(
        "HYDROXYETHYL-3,4-METHYLENEDIOXYANILINE HCl",
        Role::Coupler,
        217.65,
        "#00f5d4",
    ),
    compound("2-AMINO-3-HYDROXYPYRIDINE", Role::Coupler, 110.12, "#9b5de5"),
    compound("4-AMINO-M-CRESOL", Role::Coupler, 123.15, "#f15bb5"),
];

/// The hardcoded catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogProvider for StaticCatalog {
    fn compounds(&self) -> &[Compound] {
        COMPOUNDS
    }
}

pub fn validate_compounds(compounds: &[Compound]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for c in compounds {
        if !(c.molecular_weight.is_finite() && c.molecular_weight > 0.0) {
            return Err(AppError::InvalidCompound {
                name: c.name.to_string(),
            });
        }
        if !seen.insert(c.name) {
            return Err(AppError::Config(format!(
                "Duplicate compound name in catalog: {}",
                c.name
            )));
        }
    }
    Ok(())
}
