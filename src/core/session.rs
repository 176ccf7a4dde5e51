//! Formulation session
//!
//! Owns the mutable formulation for one run of the program. All edits go
//! through here; the calculator only ever sees borrowed slices.

use crate::core::calculator::{FormulationResult, compute_result};
use crate::core::catalog::{Role, StaticCatalog};
use crate::core::formulation::{Formulation, Grams, LineEntry};
use crate::core::traits::CatalogProvider;
use crate::utils::error::{AppResult, FlowResult};
use log::{debug, warn};

pub struct Session<C: CatalogProvider = StaticCatalog> {
    catalog: C,
    formulation: Formulation,
}

impl Session<StaticCatalog> {
    /// Session backed by the built-in catalog
    pub fn with_builtin_catalog() -> Self {
        Self::new(StaticCatalog::new())
    }
}

impl<C: CatalogProvider> Session<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            formulation: Formulation::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn formulation(&self) -> &Formulation {
        &self.formulation
    }

    /// Add a compound by name with a user-typed amount.
    ///
    /// Unknown names and unusable amounts are reported as flow outcomes and
    /// leave the formulation untouched.
    pub fn add(&mut self, role: Role, name: &str, grams_text: &str) -> FlowResult {
        let Some(compound) = self.catalog.find_in_role(name, role) else {
            return FlowResult::NotFound {
                item_type: role.to_string(),
                search_term: name.trim().to_string(),
            };
        };

        let grams = match Grams::parse(grams_text) {
            Ok(grams) => grams,
            Err(e) => {
                warn!("ignoring {} entry '{}' with amount '{}': {}", role, compound.name, grams_text, e);
                return FlowResult::Rejected(format!(
                    "{} not added: {} ('{}')",
                    compound.name,
                    e,
                    grams_text.trim()
                ));
            }
        };

        let entry = LineEntry::from_compound(compound, grams);
        let index = self.formulation.add(role, entry);
        debug!("added {} #{}: {} g of {}", role, index + 1, grams, compound.name);

        FlowResult::Success(format!("Added {} g of {}", grams, compound.name))
    }

    /// Replace the amount of an entry. An unusable amount keeps the old value.
    pub fn update(&mut self, role: Role, index: usize, grams_text: &str) -> AppResult<FlowResult> {
        let grams = match Grams::parse(grams_text) {
            Ok(grams) => grams,
            Err(e) => {
                warn!("ignoring update of {} #{} to '{}': {}", role, index + 1, grams_text, e);
                return Ok(FlowResult::Rejected(format!(
                    "{} #{} unchanged: {} ('{}')",
                    role,
                    index + 1,
                    e,
                    grams_text.trim()
                )));
            }
        };

        let entry = self.formulation.update_grams(role, index, grams)?;
        Ok(FlowResult::Success(format!(
            "{} now has {} g",
            entry.name, entry.grams
        )))
    }

    pub fn remove(&mut self, role: Role, index: usize) -> AppResult<FlowResult> {
        let entry = self.formulation.remove(role, index)?;
        debug!("removed {} #{}: {}", role, index + 1, entry.name);
        Ok(FlowResult::Success(format!("Removed {}", entry.name)))
    }

    pub fn clear(&mut self) {
        self.formulation.clear();
    }

    /// Run the calculator over the current entries
    pub fn calculate(&self) -> AppResult<FormulationResult> {
        compute_result(&self.formulation.precursors, &self.formulation.couplers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::Shade;
    use crate::core::catalog::Compound;
    use crate::utils::error::AppError;

    struct BrokenCatalog(Vec<Compound>);

    impl CatalogProvider for BrokenCatalog {
        fn compounds(&self) -> &[Compound] {
            &self.0
        }
    }

    #[test]
    fn test_add_and_calculate() {
        let mut session = Session::with_builtin_catalog();
        assert!(matches!(
            session.add(Role::Precursor, "p-Aminophenol", "109.13"),
            FlowResult::Success(_)
        ));
        assert!(matches!(
            session.add(Role::Coupler, "Resorcinol", "110.11"),
            FlowResult::Success(_)
        ));

        let result = session.calculate().unwrap();
        assert_eq!(result.shade, Shade::MoleMatch);
    }

    #[test]
    fn test_bad_amount_is_silently_dropped() {
        let mut session = Session::with_builtin_catalog();
        for text in ["", "abc", "0", "-3", "NaN"] {
            assert!(matches!(
                session.add(Role::Coupler, "Resorcinol", text),
                FlowResult::Rejected(_)
            ));
        }
        assert!(session.formulation().is_empty());
    }

    #[test]
    fn test_unknown_or_wrong_role_is_not_found() {
        let mut session = Session::with_builtin_catalog();
        assert_eq!(
            session.add(Role::Coupler, "p-Aminophenol", "5"),
            FlowResult::NotFound {
                item_type: "Coupler".to_string(),
                search_term: "p-Aminophenol".to_string(),
            }
        );
        assert!(matches!(
            session.add(Role::Precursor, "Water", "5"),
            FlowResult::NotFound { .. }
        ));
        assert!(session.formulation().is_empty());
    }

    #[test]
    fn test_update_keeps_old_value_on_bad_input() {
        let mut session = Session::with_builtin_catalog();
        session.add(Role::Coupler, "Resorcinol", "10");

        let flow = session.update(Role::Coupler, 0, "oops").unwrap();
        assert!(matches!(flow, FlowResult::Rejected(_)));
        assert_eq!(session.formulation().couplers[0].grams.value(), 10.0);

        session.update(Role::Coupler, 0, "12.5").unwrap();
        assert_eq!(session.formulation().couplers[0].grams.value(), 12.5);

        assert!(matches!(
            session.update(Role::Coupler, 4, "1"),
            Err(AppError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_then_recalculate() {
        let mut session = Session::with_builtin_catalog();
        session.add(Role::Precursor, "p-Aminophenol", "109.13");
        session.add(Role::Coupler, "Resorcinol", "110.11");
        session.add(Role::Coupler, "Resorcinol", "110.11");
        assert_eq!(session.calculate().unwrap().shade, Shade::DarkBrown);

        session.remove(Role::Coupler, 1).unwrap();
        assert_eq!(session.calculate().unwrap().shade, Shade::MoleMatch);

        assert!(session.remove(Role::Precursor, 5).is_err());

        session.clear();
        assert_eq!(session.calculate().unwrap().ratio, 0.0);
    }

    #[test]
    fn test_malformed_catalog_surfaces_invalid_compound() {
        let catalog = BrokenCatalog(vec![Compound {
            name: "Weightless",
            role: Role::Coupler,
            molecular_weight: 0.0,
            display_color: "#000000",
        }]);
        assert!(catalog.validate().is_err());
        let mut session = Session::new(catalog);
        session.add(Role::Coupler, "Weightless", "1");

        assert_eq!(
            session.calculate(),
            Err(AppError::InvalidCompound {
                name: "Weightless".to_string()
            })
        );
    }
}
