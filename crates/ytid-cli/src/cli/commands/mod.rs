//! CLI command handlers. Each command is in its own file.

mod batch;
mod extract;
mod output;

pub use batch::run_batch;
pub use extract::run_extract;
