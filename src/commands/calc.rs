use crate::cli::CalcArgs;
use crate::config::{Config, OutputFormat};
use crate::core::catalog::Role;
use crate::core::session::Session;
use crate::core::traits::CatalogProvider;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::format::split_entry_arg;
use crate::utils::output::{DisplayFormatter, print_warning};
use anyhow::Result;
use log::warn;

pub fn handle_calc_command(config: &Config, args: &CalcArgs) -> Result<()> {
    let format = args.format.unwrap_or(config.general.format);
    let mut session = Session::with_builtin_catalog();

    if args.precursors.is_empty() && args.couplers.is_empty() && format == OutputFormat::Text {
        print_warning("No entries given; add them with -p NAME=GRAMS and -c NAME=GRAMS");
    }

    let mut notices = add_entries(&mut session, Role::Precursor, &args.precursors);
    notices.extend(add_entries(&mut session, Role::Coupler, &args.couplers));

    for flow in notices {
        match format {
            OutputFormat::Text => handle_flow(flow),
            // stdout carries only the JSON document
            OutputFormat::Json => warn!("{:?}", flow),
        }
    }

    let result = session.calculate()?;
    DisplayFormatter::print_report(session.formulation(), &result, format, config)
}

/// Add every `NAME=GRAMS` argument for one role.
///
/// Returns the outcomes that did not produce an entry.
pub fn add_entries<C: CatalogProvider>(
    session: &mut Session<C>,
    role: Role,
    args: &[String],
) -> Vec<FlowResult> {
    args.iter()
        .filter_map(|arg| {
            let flow = match split_entry_arg(arg) {
                Some((name, grams)) => session.add(role, name, grams),
                None => FlowResult::Rejected(format!(
                    "Ignoring '{}': expected NAME=GRAMS",
                    arg
                )),
            };
            match flow {
                FlowResult::Success(_) => None,
                other => Some(other),
            }
        })
        .collect()
}
