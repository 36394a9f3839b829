//! Command-line argument parsing and handling.

pub mod definition;
pub mod print;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use print::{format_view_model, print_page};
pub use utils::determine_log_level;
