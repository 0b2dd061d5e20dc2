use std::fs;
use std::path::Path;

use crate::core::error::DeplistError;

/// Read non-blank lines from `path`, trimmed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DeplistError> {
    if !path.exists() {
        return Err(DeplistError::Input(format!(
            "input file not found: {}",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
