//! Mole ratio and shade prediction
//!
//! [`compute_result`] is a pure function over two slices of line entries. It
//! holds no state and can be called from anywhere with any inputs.

use crate::core::formulation::LineEntry;
use crate::utils::error::{AppError, AppResult};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Absolute tolerance for treating the two mole totals as equal
pub const MOLE_MATCH_TOLERANCE: f64 = 1e-7;

/// Ratio below which the shade is light brown
pub const LIGHT_BROWN_BELOW: f64 = 1.2;

/// Ratio below which the shade is medium brown
pub const MEDIUM_BROWN_BELOW: f64 = 1.5;

/// Heuristic shade classification of a mole balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    MoleMatch,
    ExcessPrecursor,
    LightBrown,
    MediumBrown,
    DarkBrown,
}

impl Shade {
    /// Classify a pair of mole totals. The checks form a priority chain.
    pub fn classify(precursor_moles: f64, coupler_moles: f64, ratio: f64) -> Self {
        if (coupler_moles - precursor_moles).abs() <= MOLE_MATCH_TOLERANCE {
            Shade::MoleMatch
        } else if precursor_moles > coupler_moles {
            Shade::ExcessPrecursor
        } else if ratio < LIGHT_BROWN_BELOW {
            Shade::LightBrown
        } else if ratio < MEDIUM_BROWN_BELOW {
            Shade::MediumBrown
        } else {
            Shade::DarkBrown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shade::MoleMatch => "Mole match: Ideal for reaction",
            Shade::ExcessPrecursor => "Excess precursor may self-react and deepen the color",
            Shade::LightBrown => "Light Brown",
            Shade::MediumBrown => "Medium Brown",
            Shade::DarkBrown => "Dark Brown",
        }
    }

    /// Display color as `#rrggbb`
    pub fn color(&self) -> &'static str {
        match self {
            Shade::MoleMatch => "#b28f6a",
            Shade::ExcessPrecursor => "#7e5e3c",
            Shade::LightBrown => "#c8ad7f",
            Shade::MediumBrown => "#8b5e3c",
            Shade::DarkBrown => "#4b3621",
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One bar of the mole chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub moles: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulationResult {
    pub precursor_moles: f64,
    pub coupler_moles: f64,
    pub ratio: f64,
    pub shade: Shade,
    pub shade_label: &'static str,
    pub shade_color: &'static str,
    pub chart: [ChartPoint; 2],
}

/// Round to 4 decimal places, halves away from zero
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Sum of moles for one group. Empty groups give zero.
///
/// The running sum must stay finite.
pub fn total_moles(entries: &[LineEntry]) -> AppResult<f64> {
    entries.iter().try_fold(0.0, |acc, entry| {
        if !(entry.molecular_weight.is_finite() && entry.molecular_weight > 0.0) {
            return Err(AppError::InvalidCompound {
                name: entry.name.clone(),
            });
        }
        let sum = acc + entry.moles();
        if !sum.is_finite() {
            return Err(AppError::NumericOverflow {
                quantity: format!("Total moles at {}", entry.name),
            });
        }
        Ok(sum)
    })
}

/// Coupler moles per precursor mole, or zero when there are no precursor moles
pub fn mole_ratio(precursor_moles: f64, coupler_moles: f64) -> f64 {
    if precursor_moles > 0.0 {
        coupler_moles / precursor_moles
    } else {
        0.0
    }
}

/// Compute mole totals, ratio, shade and chart series for a formulation
pub fn compute_result(
    precursors: &[LineEntry],
    couplers: &[LineEntry],
) -> AppResult<FormulationResult> {
    let precursor_moles = total_moles(precursors)?;
    let coupler_moles = total_moles(couplers)?;
    let ratio = mole_ratio(precursor_moles, coupler_moles);
    if !ratio.is_finite() {
        return Err(AppError::NumericOverflow {
            quantity: "Mole ratio".to_string(),
        });
    }
    let shade = Shade::classify(precursor_moles, coupler_moles, ratio);

    debug!(
        "precursor={} mol ({} entries), coupler={} mol ({} entries), ratio={}, shade={:?}",
        precursor_moles,
        precursors.len(),
        coupler_moles,
        couplers.len(),
        ratio,
        shade
    );

    Ok(FormulationResult {
        precursor_moles,
        coupler_moles,
        ratio,
        shade,
        shade_label: shade.label(),
        shade_color: shade.color(),
        chart: [
            ChartPoint {
                name: "Precursor",
                moles: round4(precursor_moles),
            },
            ChartPoint {
                name: "Coupler",
                moles: round4(coupler_moles),
            },
        ],
    })
}
