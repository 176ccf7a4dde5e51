//! Core calculation layer
//!
//! The compound catalog, validated formulation entries, the mole ratio
//! calculator and the session that ties them together.

pub mod calculator;
pub mod catalog;
pub mod formulation;
pub mod session;
pub mod traits;
