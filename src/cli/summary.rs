use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Number of report lines echoed back, header included.
pub const PREVIEW_LINES: usize = 5;

/// Writes the post-run summary for the report at `path` into `out`.
pub fn write_summary<W: Write>(out: &mut W, path: &Path, total: f64) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;

    writeln!(out, "Created {}", path.display())?;
    writeln!(out, "First few lines:")?;
    for line in BufReader::new(file).lines().take(PREVIEW_LINES) {
        let line =
            line.with_context(|| format!("Failed to read output file: {}", path.display()))?;
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out, "Total in EUR: {total:.2}")?;

    Ok(())
}

pub fn print_summary(path: &Path, total: f64) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, path, total)
}
