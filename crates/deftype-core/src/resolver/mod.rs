//! Default type resolution.
//!
//! A `default_type` file maps SELinux roles to their default types, one
//! `role:type` entry per line:
//!
//! ```text
//! sysadm_r:sysadm_t
//!   user_r:user_t
//! ```
//!
//! Leading whitespace is ignored and whitespace-only lines are skipped. The
//! first line whose role field is exactly the requested role wins; nothing
//! after it is read.

mod error;
mod lines;

pub use error::{DefaultTypeError, ErrorKind};
pub use lines::{ConfigLine, ConfigLines, MAX_LINE_LEN};

use std::io::BufRead;

/// Find the default type for `role` in a `default_type` stream.
///
/// Reads `reader` up to and including the first matching line. The reader is
/// not rewound or closed; pass `&mut reader` to keep using it afterwards.
pub fn find_default_type<R: BufRead>(reader: R, role: &str) -> Result<String, DefaultTypeError> {
    if role.is_empty() {
        return Err(DefaultTypeError::EmptyRole);
    }

    let mut lines = ConfigLines::new(reader);
    while let Some(line) = lines.next_line()? {
        let content = skip_leading_space(line.bytes);
        if content.is_empty() {
            tracing::trace!(line = line.number, "skipping blank line");
            continue;
        }

        if let Some(field) = type_field(content, role.as_bytes()) {
            tracing::debug!(role, line = line.number, "default type entry found");
            return owned_type(field, role, line.number);
        }
    }

    tracing::debug!(role, lines = lines.lines_read(), "no default type entry");
    Err(DefaultTypeError::NotFound {
        role: role.to_string(),
    })
}

/// C `isspace` in the "C" locale; unlike `u8::is_ascii_whitespace` this
/// includes vertical tab.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_leading_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Type field of `content` if its role field is exactly `role`.
fn type_field<'a>(content: &'a [u8], role: &[u8]) -> Option<&'a [u8]> {
    match content.strip_prefix(role)?.split_first() {
        Some((b':', rest)) => Some(rest),
        _ => None,
    }
}

/// Copy the type field into a string sized to exactly fit it.
///
/// A NUL byte can't be part of a type name, so a field holding one is
/// rejected rather than cut short.
fn owned_type(field: &[u8], role: &str, line: usize) -> Result<String, DefaultTypeError> {
    let invalid = || DefaultTypeError::InvalidEncoding {
        role: role.to_string(),
        line,
    };
    if field.contains(&0) {
        return Err(invalid());
    }
    let text = std::str::from_utf8(field).map_err(|_| invalid())?;
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(DefaultTypeError::Allocation)?;
    owned.push_str(text);
    Ok(owned)
}
