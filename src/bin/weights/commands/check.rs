use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use atomic_weights::io::read_file;

use crate::display::{Context as DisplayContext, print_table_summary};

pub fn run_check(path: &Path, ctx: DisplayContext) -> Result<()> {
    let table = read_file(path)
        .with_context(|| format!("Validation failed for {}", path.display()))?;

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{}: OK ({} elements, {} isotopic replacements)",
        path.display(),
        table.len(),
        table.replacements().len()
    )?;
    out.flush()?;

    if ctx.interactive {
        print_table_summary(&table);
    }
    Ok(())
}
