use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Invalid compound '{name}': molecular weight must be a positive number")]
    InvalidCompound { name: String },

    #[error("{role} entry #{} does not exist ({len} entries)", .index + 1)]
    IndexOutOfRange {
        role: String,
        index: usize,
        len: usize,
    },

    #[error("{quantity} is too large to compute")]
    NumericOverflow { quantity: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

/// Outcomes of a user action that are not failures
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    NotFound {
        item_type: String,
        search_term: String,
    },
    EmptyList {
        item_type: String,
    },
    Rejected(String),
    Cancelled(String),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::InvalidCompound { .. } => {
            eprintln!("🧪 {}", OutputStyle::error(&err.to_string()));
        }
        AppError::NumericOverflow { .. } => {
            eprintln!("🧪 {}", OutputStyle::error(&err.to_string()));
        }
        AppError::IndexOutOfRange { .. } => {
            println!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        AppError::Config(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::NotFound {
            item_type,
            search_term,
        } => {
            let msg = format!("{} '{}' not found", item_type, search_term);
            println!("⚠️  {}", OutputStyle::warning(&msg));
        }
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {} added yet", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Rejected(msg) => {
            println!("↩️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Cancelled(msg) => {
            println!("⏹️  {}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}
