//! Core trait definitions
//!
//! The session resolves compound names through [`CatalogProvider`], so the
//! calculator and formulation never depend on where the catalog lives.

use crate::core::catalog::{Compound, Role, validate_compounds};
use crate::utils::error::AppResult;

/// Source of catalog entries
///
/// Implementors only supply the compound list; lookups are provided.
pub trait CatalogProvider {
    /// All compounds, in display order
    fn compounds(&self) -> &[Compound];

    /// Compounds on one side of the reaction
    fn by_role(&self, role: Role) -> Vec<&Compound> {
        self.compounds().iter().filter(|c| c.role == role).collect()
    }

    /// Find a compound by exact name, falling back to a case-insensitive match
    fn find(&self, name: &str) -> Option<&Compound> {
        let name = name.trim();
        let compounds = self.compounds();
        compounds
            .iter()
            .find(|c| c.name == name)
            .or_else(|| compounds.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
    }

    /// Find a compound that belongs to the given role
    fn find_in_role(&self, name: &str, role: Role) -> Option<&Compound> {
        self.find(name).filter(|c| c.role == role)
    }

    /// Compound names for one role, used for completion
    fn names(&self, role: Role) -> Vec<String> {
        self.by_role(role).iter().map(|c| c.name.to_string()).collect()
    }

    /// Check that names are unique and every weight is positive and finite
    fn validate(&self) -> AppResult<()> {
        validate_compounds(self.compounds())
    }
}
