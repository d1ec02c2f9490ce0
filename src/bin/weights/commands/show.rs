use std::io::{self, Write};

use anyhow::{Result, bail};

use atomic_weights::{AtomicWeights, Element, MassSource};

enum Lookup<'a> {
    Element(&'a Element),
    Replacement { owner: &'a Element, symbol: &'a str, mass: f64 },
}

pub fn run_show(table: &AtomicWeights, query: &str) -> Result<()> {
    let Some(found) = lookup(table, query) else {
        bail!("No element or isotopic replacement matches '{query}'");
    };

    let mut out = io::stdout().lock();
    match found {
        Lookup::Element(element) => writeln!(out, "{element}")?,
        Lookup::Replacement {
            owner,
            symbol,
            mass,
        } => {
            writeln!(
                out,
                "{symbol} : {mass:.4} (isotopic replacement for {}, Z={})",
                owner.display_name(),
                owner.atomic_number()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

fn lookup<'a>(table: &'a AtomicWeights, query: &'a str) -> Option<Lookup<'a>> {
    let query = query.trim();

    if let Ok(z) = query.parse::<u32>() {
        return table.element_by_number(z).map(Lookup::Element);
    }

    if let Some(MassSource::Replacement(owner, mass)) = table.mass_of(query) {
        return Some(Lookup::Replacement {
            owner,
            symbol: query,
            mass,
        });
    }

    table.find(query).map(Lookup::Element)
}
