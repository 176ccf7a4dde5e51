use crate::config::{Config, OutputFormat};
use crate::core::calculator::{FormulationResult, Shade};
use crate::core::catalog::{Compound, Role};
use crate::core::formulation::{Formulation, LineEntry};
use crate::utils::format::{bar_length, format_fixed, parse_hex_color, truncate_string};
use anyhow::Result;
use colored::*;
use serde::Serialize;

const NAME_WIDTH: usize = 44;

pub struct OutputStyle;

impl OutputStyle {
    pub fn number(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Text drawn in a `#rrggbb` color, plain if the color does not parse
    pub fn hex(text: &str, hex: &str) -> ColoredString {
        match parse_hex_color(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b),
            None => text.normal(),
        }
    }

    /// Solid block in a `#rrggbb` color
    pub fn swatch(hex: &str, width: usize) -> ColoredString {
        let block = " ".repeat(width);
        match parse_hex_color(hex) {
            Some((r, g, b)) => block.as_str().on_truecolor(r, g, b),
            None => block.as_str().normal(),
        }
    }

    pub fn separator() -> String {
        "─".repeat(60)
    }

    pub fn header_separator() -> String {
        "═".repeat(60)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>14}: {}", Self::label(label), color_fn(value));
    }

    /// Headline for a shade, with the marker used by the calculator's UI
    pub fn shade_headline(shade: Shade) -> String {
        match shade {
            Shade::MoleMatch => format!("✅ {}.", shade.label()),
            Shade::ExcessPrecursor => format!("❗ {}.", shade.label()),
            _ => format!("Predicted Shade: {}", shade.label()),
        }
    }
}

/// Apply the color preference to everything printed through `colored`
pub fn apply_color_preference(config: &Config, no_color: bool) {
    if no_color || !config.general.color {
        colored::control::set_override(false);
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

#[derive(Serialize)]
struct CalcReport<'a> {
    formulation: &'a Formulation,
    result: &'a FormulationResult,
}

/// Display formatter for catalog, entries and results
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn print_catalog(compounds: &[&Compound], format: OutputFormat) -> Result<()> {
        if compounds.is_empty() {
            crate::utils::error::handle_flow(crate::utils::error::FlowResult::EmptyList {
                item_type: "compounds".to_string(),
            });
            return Ok(());
        }

        match format {
            OutputFormat::Json => Self::print_json(&compounds)?,
            OutputFormat::Text => {
                OutputStyle::print_header(&format!("🧪 Compound Catalog ({})", compounds.len()));
                let mut current: Option<Role> = None;
                for compound in compounds {
                    if current != Some(compound.role) {
                        current = Some(compound.role);
                        println!("\n{}", OutputStyle::header(compound.role.as_str()));
                    }
                    println!(
                        "  {} {:<width$} {}",
                        OutputStyle::hex("●", compound.display_color),
                        compound.name,
                        OutputStyle::muted(&format!("(MW: {})", compound.molecular_weight)),
                        width = NAME_WIDTH
                    );
                }
            }
        }
        Ok(())
    }

    /// Table of one group's entries: index, name, MW, grams, moles
    pub fn print_entries(role: Role, entries: &[LineEntry]) {
        println!("\n{}", OutputStyle::header(&format!("{}s", role)));
        if entries.is_empty() {
            println!("  {}", OutputStyle::muted("(none)"));
            return;
        }

        println!(
            "  {:>3}  {:<width$} {:>8} {:>10} {:>10}",
            "#",
            "Name",
            "MW",
            "Grams",
            "Moles",
            width = NAME_WIDTH
        );
        println!("  {}", OutputStyle::separator());
        for (i, entry) in entries.iter().enumerate() {
            println!(
                "  {:>3}  {:<width$} {:>8} {:>10} {:>10}",
                i + 1,
                truncate_string(&entry.name, NAME_WIDTH),
                entry.molecular_weight,
                entry.grams.to_string(),
                format_fixed(entry.moles(), 4),
                width = NAME_WIDTH
            );
        }
    }

    pub fn print_formulation(formulation: &Formulation) {
        Self::print_entries(Role::Precursor, &formulation.precursors);
        Self::print_entries(Role::Coupler, &formulation.couplers);
    }

    /// Ratio, shade headline, color swatch and mole chart
    pub fn print_result(result: &FormulationResult, config: &Config) {
        println!();
        OutputStyle::print_header("⚗️  Result");
        OutputStyle::print_field_colored(
            "Mole Ratio",
            &format!("{} (Coupler / Precursor)", format_fixed(result.ratio, 2)),
            OutputStyle::number,
        );
        println!("{:>14}  {}", "", OutputStyle::shade_headline(result.shade));
        println!(
            "{:>14}  {} {}",
            "",
            OutputStyle::swatch(result.shade_color, 12),
            OutputStyle::muted(result.shade_color)
        );

        println!("\n{}", OutputStyle::header("Moles"));
        let max = result
            .chart
            .iter()
            .map(|p| p.moles)
            .fold(0.0_f64, f64::max);
        for point in &result.chart {
            let cells = bar_length(point.moles, max, config.general.chart_width);
            println!(
                "  {:<10} {} {}",
                point.name,
                OutputStyle::info(&"█".repeat(cells)),
                OutputStyle::number(&format_fixed(point.moles, 4))
            );
        }
    }

    /// Full report in the configured format
    pub fn print_report(
        formulation: &Formulation,
        result: &FormulationResult,
        format: OutputFormat,
        config: &Config,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => Self::print_json(&CalcReport {
                formulation,
                result,
            })?,
            OutputFormat::Text => {
                if config.general.show_entries {
                    Self::print_formulation(formulation);
                }
                Self::print_result(result, config);
            }
        }
        Ok(())
    }

    fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {}", e))?;
        println!("{}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::compute_result;
    use crate::core::formulation::Grams;

    #[test]
    fn test_shade_headlines() {
        assert_eq!(
            OutputStyle::shade_headline(Shade::MoleMatch),
            "✅ Mole match: Ideal for reaction."
        );
        assert!(OutputStyle::shade_headline(Shade::ExcessPrecursor).starts_with("❗ Excess"));
        assert_eq!(
            OutputStyle::shade_headline(Shade::MediumBrown),
            "Predicted Shade: Medium Brown"
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut formulation = Formulation::new();
        formulation.add(
            Role::Coupler,
            LineEntry::new("Resorcinol", 110.11, Grams::new(110.11).unwrap()),
        );
        let result = compute_result(&formulation.precursors, &formulation.couplers).unwrap();

        let json = serde_json::to_value(CalcReport {
            formulation: &formulation,
            result: &result,
        })
        .unwrap();

        assert_eq!(json["result"]["shade"], "light_brown");
        assert_eq!(json["result"]["shade_label"], "Light Brown");
        assert_eq!(json["result"]["chart"][1]["name"], "Coupler");
        assert_eq!(json["result"]["chart"][1]["moles"], 1.0);
        assert_eq!(json["formulation"]["couplers"][0]["grams"], 110.11);
    }
}
