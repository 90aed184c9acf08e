//! `workshop categories` command.

use std::io::Write;

use crate::error::Result;
use crate::quiz::Category;

/// Print every category, marking the default.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn run<W: Write>(writer: &mut W) -> Result<()> {
    for category in Category::ALL {
        if category == Category::default() {
            writeln!(writer, "{category} (default)")?;
        } else {
            writeln!(writer, "{category}")?;
        }
    }
    Ok(())
}
