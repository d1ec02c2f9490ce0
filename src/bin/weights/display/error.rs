use std::io::{self, Write};

use anyhow::Error;

use atomic_weights::io::Error as LoadError;
use atomic_weights::{ElementError, ReplacementError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    match err.downcast_ref::<LoadError>() {
        Some(load_err) => load_hints(load_err),
        None => fallback_hints(err),
    }
}

fn load_hints(err: &LoadError) -> Vec<String> {
    let mut hints = Vec::new();

    match err {
        LoadError::Io { source } => match source.kind() {
            io::ErrorKind::NotFound => {
                hints.push("File not found; check the path passed to --data or check".into());
            }
            io::ErrorKind::PermissionDenied => {
                hints.push("Permission denied; check file permissions with `ls -la`".into());
            }
            _ => hints.push("Check the file path and permissions".into()),
        },

        LoadError::MalformedRecord { line, .. } => {
            hints.push(format!("Inspect line {line} of the data file"));
            hints.push(
                "Each record is full_name,atomic_number,symbol,default_mass \
                 followed by zero or more isotope_symbol,mass pairs"
                    .into(),
            );
        }

        LoadError::InvalidElementField { line, source, .. } => {
            hints.push(format!("Inspect line {line} of the data file"));
            hints.push(element_hint(source).into());
        }

        LoadError::InvalidReplacementField { line, source, .. } => {
            hints.push(format!("Inspect line {line} of the data file"));
            hints.push(replacement_hint(source).into());
        }
    }

    hints
}

fn element_hint(err: &ElementError) -> &'static str {
    match err {
        ElementError::InvalidName(_) => "Element names must be lowercase letters only, e.g. 'iron'",
        ElementError::InvalidSymbol(_) | ElementError::SymbolLength { .. } => {
            "Element symbols are one or two letters, e.g. 'Fe'"
        }
        ElementError::InvalidAtomicNumber(_) | ElementError::AtomicNumberOutOfRange(_) => {
            "Atomic numbers are whole numbers from 1 to 200"
        }
        ElementError::InvalidMass(_) | ElementError::MassOutOfRange(_) => {
            "Default masses are decimal numbers from 0 to 500"
        }
    }
}

fn replacement_hint(err: &ReplacementError) -> &'static str {
    match err {
        ReplacementError::InvalidSymbol(_) | ReplacementError::SymbolLength { .. } => {
            "Isotope symbols are 1-4 letters or digits, e.g. '13C'"
        }
        ReplacementError::DuplicateSymbol(_) => {
            "Each isotope symbol may appear only once per element"
        }
        ReplacementError::InvalidMass(_) | ReplacementError::MassOutOfRange(_) => {
            "Isotope masses are decimal numbers from 0 to 500"
        }
    }
}

fn fallback_hints(err: &Error) -> Vec<String> {
    let msg = err.to_string().to_lowercase();

    if msg.contains("no element") {
        vec![
            "Run `weights list` to see every known element".into(),
            "Symbols are matched case-insensitively; isotope symbols exactly".into(),
        ]
    } else {
        Vec::new()
    }
}
