use crate::config::Config;
use crate::core::catalog::Role;
use crate::core::session::Session;
use crate::core::traits::CatalogProvider;
use crate::utils::error::{AppError, FlowResult, handle_flow, report_error};
use crate::utils::format::split_entry_arg;
use crate::utils::interactive::{prompt_input, prompt_input_with_autocomplete, prompt_yes_no};
use crate::utils::output::{DisplayFormatter, OutputStyle};
use anyhow::Result;
use log::debug;

/// One line typed at the session prompt
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Add an entry; without an inline `NAME=GRAMS` the user is prompted
    Add {
        role: Role,
        entry: Option<(String, String)>,
    },
    /// Replace the grams of an entry (0-based index)
    Update {
        role: Role,
        index: usize,
        grams: String,
    },
    Remove {
        role: Role,
        index: usize,
    },
    List,
    Calculate,
    Clear,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_lowercase().as_str() {
            "add" | "a" => {
                let (role_word, entry) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let role = parse_role(role_word)?;
                let entry = if entry.trim().is_empty() {
                    None
                } else {
                    let (name, grams) = split_entry_arg(entry)
                        .ok_or_else(|| format!("Expected NAME=GRAMS, got '{}'", entry.trim()))?;
                    Some((name.to_string(), grams.to_string()))
                };
                Ok(SessionCommand::Add { role, entry })
            }
            "update" | "set" => {
                let mut parts = rest.split_whitespace();
                let role = parse_role(parts.next().unwrap_or(""))?;
                let index = parse_position(parts.next().unwrap_or(""))?;
                let grams = parts.collect::<Vec<_>>().join(" ");
                Ok(SessionCommand::Update { role, index, grams })
            }
            "remove" | "rm" | "delete" => {
                let mut parts = rest.split_whitespace();
                let role = parse_role(parts.next().unwrap_or(""))?;
                let index = parse_position(parts.next().unwrap_or(""))?;
                Ok(SessionCommand::Remove { role, index })
            }
            "list" | "ls" => Ok(SessionCommand::List),
            "calc" | "recalc" | "recalculate" => Ok(SessionCommand::Calculate),
            "clear" => Ok(SessionCommand::Clear),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            "" => Err("Type 'help' for the list of commands".to_string()),
            other => Err(format!("Unknown command '{}'. Type 'help' for the list of commands", other)),
        }
    }
}

fn parse_role(word: &str) -> Result<Role, String> {
    match word.to_lowercase().as_str() {
        "precursor" | "precursors" | "primary" | "p" => Ok(Role::Precursor),
        "coupler" | "couplers" | "c" => Ok(Role::Coupler),
        "" => Err("Missing role: precursor or coupler".to_string()),
        other => Err(format!("Unknown role '{}': use precursor or coupler", other)),
    }
}

/// Parse a 1-based position as shown in the entry tables
fn parse_position(word: &str) -> Result<usize, String> {
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected an entry number (1, 2, ...), got '{}'", word)),
    }
}

pub fn handle_session_command(config: &Config) -> Result<()> {
    let mut session = Session::with_builtin_catalog();

    OutputStyle::print_header("🧪 Hair Dye Mole Ratio Calculator");
    println!("{}", OutputStyle::muted("Type 'help' for commands, 'quit' to leave."));

    loop {
        let Some(line) = prompt_input(&format!("{} ", OutputStyle::label("dyeratio>")))? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                handle_flow(FlowResult::Rejected(msg));
                continue;
            }
        };
        debug!("session command: {:?}", command);

        if command == SessionCommand::Quit {
            break;
        }
        if let Err(e) = run_command(&mut session, command, config) {
            match e.downcast_ref::<AppError>() {
                Some(app_error) => report_error(app_error),
                None => return Err(e),
            }
        }
    }

    Ok(())
}

fn run_command<C: CatalogProvider>(
    session: &mut Session<C>,
    command: SessionCommand,
    config: &Config,
) -> Result<()> {
    match command {
        SessionCommand::Add { role, entry } => {
            let Some((name, grams)) = entry.map_or_else(|| prompt_for_entry(session, role), |e| Ok(Some(e)))? else {
                handle_flow(FlowResult::Cancelled("Nothing added".to_string()));
                return Ok(());
            };
            let flow = session.add(role, &name, &grams);
            let changed = matches!(flow, FlowResult::Success(_));
            handle_flow(flow);
            if changed {
                print_result(session, config)?;
            }
        }
        SessionCommand::Update { role, index, grams } => {
            let flow = session.update(role, index, &grams)?;
            let changed = matches!(flow, FlowResult::Success(_));
            handle_flow(flow);
            if changed {
                print_result(session, config)?;
            }
        }
        SessionCommand::Remove { role, index } => {
            handle_flow(session.remove(role, index)?);
            print_result(session, config)?;
        }
        SessionCommand::List => {
            if session.formulation().is_empty() {
                handle_flow(FlowResult::EmptyList {
                    item_type: "entries".to_string(),
                });
            } else {
                DisplayFormatter::print_formulation(session.formulation());
            }
        }
        SessionCommand::Calculate => {
            DisplayFormatter::print_formulation(session.formulation());
            print_result(session, config)?;
        }
        SessionCommand::Clear => {
            if session.formulation().is_empty() || prompt_yes_no("Remove all entries?")? {
                session.clear();
                handle_flow(FlowResult::Success("Formulation cleared".to_string()));
            } else {
                handle_flow(FlowResult::Cancelled("Formulation kept".to_string()));
            }
        }
        SessionCommand::Help => print_help(),
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn prompt_for_entry<C: CatalogProvider>(session: &Session<C>, role: Role) -> Result<Option<(String, String)>> {
    for compound in session.catalog().by_role(role) {
        println!(
            "  {} {} {}",
            OutputStyle::hex("●", compound.display_color),
            compound.name,
            OutputStyle::muted(&format!("(MW: {})", compound.molecular_weight))
        );
    }

    let names = session.catalog().names(role);
    let Some(name) = prompt_input_with_autocomplete(&format!("{} name: ", role), &names)? else {
        return Ok(None);
    };
    if name.is_empty() {
        return Ok(None);
    }
    let Some(grams) = prompt_input("Enter grams: ")? else {
        return Ok(None);
    };
    Ok(Some((name, grams)))
}

fn print_result<C: CatalogProvider>(session: &Session<C>, config: &Config) -> Result<()> {
    let result = session.calculate()?;
    DisplayFormatter::print_result(&result, config);
    Ok(())
}

fn print_help() {
    OutputStyle::print_header("Commands");
    let rows = [
        ("add <precursor|coupler> [NAME=GRAMS]", "Add an entry (prompts when NAME=GRAMS is omitted)"),
        ("update <precursor|coupler> <#> <GRAMS>", "Change the grams of entry #"),
        ("remove <precursor|coupler> <#>", "Delete entry #"),
        ("list", "Show the entry tables"),
        ("calc", "Recalculate and show everything"),
        ("clear", "Remove all entries"),
        ("quit", "Leave the session"),
    ];
    for (usage, description) in rows {
        println!("  {:<42} {}", OutputStyle::label(usage), OutputStyle::muted(description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            SessionCommand::parse("add precursor"),
            Ok(SessionCommand::Add {
                role: Role::Precursor,
                entry: None
            })
        );
        assert_eq!(
            SessionCommand::parse("add c 2,4-Diaminophenoxyethanol HCl = 3.5"),
            Ok(SessionCommand::Add {
                role: Role::Coupler,
                entry: Some(("2,4-Diaminophenoxyethanol HCl".to_string(), "3.5".to_string()))
            })
        );
        assert!(SessionCommand::parse("add coupler Resorcinol").is_err());
        assert!(SessionCommand::parse("add developer").is_err());
    }

    #[test]
    fn test_parse_positions_are_one_based() {
        assert_eq!(
            SessionCommand::parse("update coupler 2 7.5"),
            Ok(SessionCommand::Update {
                role: Role::Coupler,
                index: 1,
                grams: "7.5".to_string()
            })
        );
        assert_eq!(
            SessionCommand::parse("rm Primary 1"),
            Ok(SessionCommand::Remove {
                role: Role::Precursor,
                index: 0
            })
        );
        assert!(SessionCommand::parse("remove coupler 0").is_err());
        assert!(SessionCommand::parse("remove coupler").is_err());
    }

    #[test]
    fn test_parse_update_keeps_bad_grams_for_the_session() {
        // the session decides what to do with unusable amounts
        assert_eq!(
            SessionCommand::parse("set p 1 lots"),
            Ok(SessionCommand::Update {
                role: Role::Precursor,
                index: 0,
                grams: "lots".to_string()
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(SessionCommand::parse("  LIST "), Ok(SessionCommand::List));
        assert_eq!(SessionCommand::parse("recalc"), Ok(SessionCommand::Calculate));
        assert_eq!(SessionCommand::parse("clear"), Ok(SessionCommand::Clear));
        assert_eq!(SessionCommand::parse("?"), Ok(SessionCommand::Help));
        assert_eq!(SessionCommand::parse("exit"), Ok(SessionCommand::Quit));
        assert!(SessionCommand::parse("").is_err());
        assert!(SessionCommand::parse("mix").is_err());
    }

    #[test]
    fn test_run_command_edits_the_session() {
        let config = Config::default();
        let mut session = Session::with_builtin_catalog();

        run_command(
            &mut session,
            SessionCommand::Add {
                role: Role::Coupler,
                entry: Some(("Resorcinol".to_string(), "10".to_string())),
            },
            &config,
        )
        .unwrap();
        assert_eq!(session.formulation().couplers.len(), 1);

        let err = run_command(
            &mut session,
            SessionCommand::Remove {
                role: Role::Coupler,
                index: 3,
            },
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::IndexOutOfRange { .. })
        ));

        run_command(
            &mut session,
            SessionCommand::Remove {
                role: Role::Coupler,
                index: 0,
            },
            &config,
        )
        .unwrap();
        assert!(session.formulation().is_empty());
    }
}
