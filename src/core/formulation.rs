//! Line entries and the working formulation
//!
//! Masses are validated when they enter the program: a [`LineEntry`] can only
//! hold a [`Grams`], and a [`Grams`] is always finite and greater than zero.

use crate::core::catalog::{Compound, Role};
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a grams value was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GramsError {
    #[error("no amount given")]
    Empty,
    #[error("amount is not a number")]
    NotANumber,
    #[error("amount must be finite")]
    NotFinite,
    #[error("amount must not be zero")]
    Zero,
    #[error("amount must not be negative")]
    Negative,
    #[error("amount is too small")]
    TooSmall,
}

/// A mass in grams, finite and at least `f64::MIN_POSITIVE`
///
/// Subnormal amounts are refused so that a lone tiny entry cannot produce an
/// infinite ratio next to a chart bar that rounds to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Grams(f64);

impl Grams {
    pub fn new(value: f64) -> Result<Self, GramsError> {
        if value.is_nan() {
            Err(GramsError::NotANumber)
        } else if value.is_infinite() {
            Err(GramsError::NotFinite)
        } else if value == 0.0 {
            Err(GramsError::Zero)
        } else if value < 0.0 {
            Err(GramsError::Negative)
        } else if value < f64::MIN_POSITIVE {
            Err(GramsError::TooSmall)
        } else {
            Ok(Self(value))
        }
    }

    /// Parse user text such as `"10.913"`
    pub fn parse(text: &str) -> Result<Self, GramsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GramsError::Empty);
        }
        let value: f64 = text.parse().map_err(|_| GramsError::NotANumber)?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Grams {
    type Err = GramsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One compound with its mass
///
/// The molecular weight is copied by value so the calculator does not need the
/// catalog. It is checked by the calculator, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineEntry {
    pub name: String,
    pub molecular_weight: f64,
    pub grams: Grams,
}

impl LineEntry {
    pub fn new(name: impl Into<String>, molecular_weight: f64, grams: Grams) -> Self {
        Self {
            name: name.into(),
            molecular_weight,
            grams,
        }
    }

    pub fn from_compound(compound: &Compound, grams: Grams) -> Self {
        Self::new(compound.name, compound.molecular_weight, grams)
    }

    /// `grams / molecular_weight`
    pub fn moles(&self) -> f64 {
        self.grams.value() / self.molecular_weight
    }
}

/// Precursor and coupler entries for one calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Formulation {
    pub precursors: Vec<LineEntry>,
    pub couplers: Vec<LineEntry>,
}

impl Formulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self, role: Role) -> &[LineEntry] {
        match role {
            Role::Precursor => &self.precursors,
            Role::Coupler => &self.couplers,
        }
    }

    fn entries_mut(&mut self, role: Role) -> &mut Vec<LineEntry> {
        match role {
            Role::Precursor => &mut self.precursors,
            Role::Coupler => &mut self.couplers,
        }
    }

    /// Append an entry, returning its index
    pub fn add(&mut self, role: Role, entry: LineEntry) -> usize {
        let entries = self.entries_mut(role);
        entries.push(entry);
        entries.len() - 1
    }

    /// Replace the mass of the entry at `index`, keeping its position
    pub fn update_grams(&mut self, role: Role, index: usize, grams: Grams) -> AppResult<&LineEntry> {
        let entries = self.entries_mut(role);
        let len = entries.len();
        let entry = entries
            .get_mut(index)
            .ok_or_else(|| out_of_range(role, index, len))?;
        entry.grams = grams;
        Ok(&*entry)
    }

    /// Remove the entry at `index`; later entries shift down
    pub fn remove(&mut self, role: Role, index: usize) -> AppResult<LineEntry> {
        let entries = self.entries_mut(role);
        if index >= entries.len() {
            return Err(out_of_range(role, index, entries.len()));
        }
        Ok(entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.precursors.clear();
        self.couplers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.precursors.is_empty() && self.couplers.is_empty()
    }
}

fn out_of_range(role: Role, index: usize, len: usize) -> AppError {
    AppError::IndexOutOfRange {
        role: role.to_string(),
        index,
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grams(v: f64) -> Grams {
        Grams::new(v).unwrap()
    }

    #[test]
    fn test_grams_accepts_positive_numbers() {
        assert_eq!(Grams::parse("10.913").unwrap().value(), 10.913);
        assert_eq!(Grams::parse("  2 ").unwrap().value(), 2.0);
        assert_eq!("1e-3".parse::<Grams>().unwrap().value(), 0.001);
    }

    #[test]
    fn test_grams_rejects_bad_input() {
        assert_eq!(Grams::parse(""), Err(GramsError::Empty));
        assert_eq!(Grams::parse("   "), Err(GramsError::Empty));
        assert_eq!(Grams::parse("ten"), Err(GramsError::NotANumber));
        assert_eq!(Grams::parse("12g"), Err(GramsError::NotANumber));
        assert_eq!(Grams::parse("NaN"), Err(GramsError::NotANumber));
        assert_eq!(Grams::parse("inf"), Err(GramsError::NotFinite));
        assert_eq!(Grams::parse("0"), Err(GramsError::Zero));
        assert_eq!(Grams::parse("-0.0"), Err(GramsError::Zero));
        assert_eq!(Grams::parse("-4"), Err(GramsError::Negative));
        assert_eq!(Grams::parse("1e-320"), Err(GramsError::TooSmall));
        assert_eq!(Grams::new(f64::MIN_POSITIVE).unwrap().value(), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_moles_is_grams_over_weight() {
        let entry = LineEntry::new("Resorcinol", 110.11, grams(110.11));
        assert_relative_eq!(entry.moles(), 1.0);

        let light = LineEntry::new("A", 100.0, grams(5.0));
        let heavy = LineEntry::new("A", 200.0, grams(5.0));
        let more = LineEntry::new("A", 100.0, grams(6.0));
        assert!(heavy.moles() < light.moles());
        assert!(more.moles() > light.moles());
    }

    #[test]
    fn test_add_update_remove_by_position() {
        let mut formulation = Formulation::new();
        assert!(formulation.is_empty());

        assert_eq!(formulation.add(Role::Coupler, LineEntry::new("A", 100.0, grams(1.0))), 0);
        assert_eq!(formulation.add(Role::Coupler, LineEntry::new("B", 100.0, grams(2.0))), 1);
        assert_eq!(formulation.add(Role::Precursor, LineEntry::new("P", 50.0, grams(3.0))), 0);

        let updated = formulation.update_grams(Role::Coupler, 1, grams(7.5)).unwrap();
        assert_eq!(updated.name, "B");
        assert_eq!(formulation.couplers[1].grams.value(), 7.5);

        let removed = formulation.remove(Role::Coupler, 0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(formulation.entries(Role::Coupler).len(), 1);
        assert_eq!(formulation.entries(Role::Coupler)[0].name, "B");
        assert_eq!(formulation.entries(Role::Precursor).len(), 1);

        formulation.clear();
        assert!(formulation.is_empty());
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut formulation = Formulation::new();
        formulation.add(Role::Precursor, LineEntry::new("P", 50.0, grams(3.0)));

        assert_eq!(
            formulation.remove(Role::Precursor, 1),
            Err(AppError::IndexOutOfRange {
                role: "Precursor".to_string(),
                index: 1,
                len: 1
            })
        );
        assert!(formulation.update_grams(Role::Coupler, 0, grams(1.0)).is_err());
        assert_eq!(formulation.precursors[0].grams.value(), 3.0);
    }
}
