//! Default SELinux type lookup for a role.

pub mod config;
pub mod logging;

pub mod path;
pub mod resolver;

pub use path::{get_default_type, DefaultTypePath};
pub use resolver::{find_default_type, DefaultTypeError, ErrorKind};
