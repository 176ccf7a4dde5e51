pub mod error;
pub mod format;
pub mod interactive;
pub mod logging;
pub mod output;

pub use error::{handle_flow, report_error};
pub use output::{OutputStyle, print_success, print_warning};
