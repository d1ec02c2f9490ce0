use std::io::{self, Write};

use atomic_weights::AtomicWeights;
use atomic_weights::constants::PHYSICAL_CONSTANTS;

use crate::util::text::truncate;

const INDENT: &str = "      ";

pub fn print_table_summary(table: &AtomicWeights) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Elements", format!("{}", table.len())),
        (
            "Isotopic Replacements",
            format!("{}", table.replacements().len()),
        ),
    ];

    let numbers = table.default_masses().keys();
    if let (Some(min), Some(max)) = (numbers.clone().min(), numbers.max()) {
        rows.push(("Atomic Numbers", format!("{min}–{max}")));
    }

    let shadowed = table.len() - table.default_masses().len();
    if shadowed > 0 {
        rows.push(("Shadowed Entries", format!("{shadowed}")));
    }

    print_kv_table(&mut out, "Table Summary", &rows);
}

pub fn print_constants() {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let key_w = 5usize;
    let value_w = 14usize;
    let unit_w = 8usize;
    let desc_w = 22usize;

    let _ = writeln!(
        out,
        "┌{}┬{}┬{}┬{}┐",
        "─".repeat(key_w + 2),
        "─".repeat(value_w + 2),
        "─".repeat(unit_w + 2),
        "─".repeat(desc_w + 2)
    );
    let _ = writeln!(
        out,
        "│ {:<key_w$} │ {:>value_w$} │ {:<unit_w$} │ {:<desc_w$} │",
        "Key", "Value", "Unit", "Description"
    );
    let _ = writeln!(
        out,
        "├{}┼{}┼{}┼{}┤",
        "─".repeat(key_w + 2),
        "─".repeat(value_w + 2),
        "─".repeat(unit_w + 2),
        "─".repeat(desc_w + 2)
    );
    for c in PHYSICAL_CONSTANTS {
        let _ = writeln!(
            out,
            "│ {:<key_w$} │ {:>value_w$.6e} │ {:<unit_w$} │ {:<desc_w$} │",
            c.key,
            c.value,
            c.unit,
            truncate(c.description, desc_w)
        );
    }
    let _ = writeln!(
        out,
        "└{}┴{}┴{}┴{}┘",
        "─".repeat(key_w + 2),
        "─".repeat(value_w + 2),
        "─".repeat(unit_w + 2),
        "─".repeat(desc_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let val_w = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┐",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    for (key, value) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            key,
            value,
            key_w = key_w,
            val_w = val_w
        );
    }
    let _ = writeln!(
        out,
        "{}└{}┴{}┘",
        INDENT,
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}
