use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::error::DeplistError;

/// Write one item per line to `path`, replacing any existing file.
pub fn write_lines<I, S>(items: I, path: &Path) -> Result<usize, DeplistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    let written = write_to(&mut writer, items)?;
    writer.flush()?;
    Ok(written)
}

/// Print one item per line to stdout.
pub fn print_lines<I, S>(items: I) -> Result<usize, DeplistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let written = write_to(&mut writer, items)?;
    writer.flush()?;
    Ok(written)
}

fn write_to<W, I, S>(writer: &mut W, items: I) -> Result<usize, DeplistError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut count = 0usize;
    for item in items {
        writer.write_all(item.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}
