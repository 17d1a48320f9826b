//! CLI command handlers. Each command is in its own file.

mod lookup;
mod path;

pub use lookup::run_lookup;
pub use path::run_path;
