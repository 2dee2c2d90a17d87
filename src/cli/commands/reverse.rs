use anyhow::Result;

use crate::reverse::{GREETING, reverse};

/// Print `text` (or the greeting) reversed.
pub fn execute_reverse_command(text: Option<&str>) -> Result<()> {
    println!("{}", reverse(text.unwrap_or(GREETING)));
    Ok(())
}
