use std::io::{self, Write};

use anyhow::Result;

use atomic_weights::AtomicWeights;

use crate::display::{Context, print_table_summary};

pub fn run_list(table: &AtomicWeights, ctx: Context) -> Result<()> {
    let mut out = io::stdout().lock();
    for element in table.elements() {
        writeln!(out, "{element}")?;
    }
    out.flush()?;

    if ctx.interactive {
        print_table_summary(table);
    }
    Ok(())
}
