use crate::utils::output::OutputStyle;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style,
    terminal::{self, ClearType},
};
use std::io::{self, IsTerminal, Write};

/// Read one trimmed line. `None` at end of input.
pub fn prompt_input(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let answer = prompt_input(&format!("{} [y/N]: ", prompt))?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Remaining text of the first suggestion that starts with `input`, ignoring case.
///
/// Needs at least two typed characters.
pub fn complete<'a>(input: &str, suggestions: &'a [String]) -> Option<&'a str> {
    if input.chars().count() < 2 {
        return None;
    }
    let lowered = input.to_lowercase();
    suggestions.iter().find_map(|s| {
        let prefix = s.get(..input.len())?;
        if prefix.to_lowercase() == lowered && s.len() > input.len() {
            Some(&s[input.len()..])
        } else {
            None
        }
    })
}

/// Line input with inline completion: the suggestion is shown dimmed and Tab
/// accepts it. Esc or Ctrl+C cancels with `None`.
///
/// Falls back to [`prompt_input`] when stdin is not a terminal.
pub fn prompt_input_with_autocomplete(prompt: &str, suggestions: &[String]) -> Result<Option<String>> {
    if !io::stdin().is_terminal() {
        return prompt_input(prompt);
    }

    print!("{}", prompt);
    io::stdout().flush()?;
    terminal::enable_raw_mode()?;

    let result = (|| -> Result<Option<String>> {
        let mut input = String::new();

        loop {
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            else {
                continue;
            };

            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(None),
                KeyCode::Esc => return Ok(None),
                KeyCode::Enter => break,
                KeyCode::Tab => {
                    if let Some(rest) = complete(&input, suggestions) {
                        input.push_str(rest);
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => continue,
            }

            let hint = complete(&input, suggestions).unwrap_or("");
            execute!(
                io::stdout(),
                cursor::MoveToColumn(0),
                terminal::Clear(ClearType::CurrentLine),
                style::Print(prompt),
                style::Print(&input),
                style::Print(OutputStyle::muted(hint))
            )?;
            if !hint.is_empty() {
                execute!(io::stdout(), cursor::MoveLeft(hint.chars().count() as u16))?;
            }
            io::stdout().flush()?;
        }

        Ok(Some(input.trim().to_string()))
    })();

    terminal::disable_raw_mode()?;
    println!();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec![
            "Resorcinol".to_string(),
            "2-METHYLRESORCINOL".to_string(),
            "4-CHLORORESORCINOL".to_string(),
        ]
    }

    #[test]
    fn test_complete_needs_two_characters() {
        let names = names();
        assert_eq!(complete("R", &names), None);
        assert_eq!(complete("Re", &names), Some("sorcinol"));
    }

    #[test]
    fn test_complete_ignores_case() {
        let names = names();
        assert_eq!(complete("2-meth", &names), Some("YLRESORCINOL"));
        assert_eq!(complete("resorcinol", &names), None);
        assert_eq!(complete("xy", &names), None);
    }
}
