use super::error::Error;
use super::record::records;
use crate::model::element::Element;
use crate::table::AtomicWeights;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::debug;

/// Reads, validates and aggregates a whole dataset.
///
/// Stops at the first malformed or invalid record; no partially built table
/// is ever returned.
pub fn read<R: BufRead>(reader: R) -> Result<AtomicWeights, Error> {
    let elements = read_elements(reader)?;
    Ok(AtomicWeights::from_elements(elements))
}

pub fn read_str(text: &str) -> Result<AtomicWeights, Error> {
    read(Cursor::new(text))
}

/// Opens `path`, reads it to the end and closes it again before the tables
/// are built, whether or not reading succeeded.
pub fn read_file(path: impl AsRef<Path>) -> Result<AtomicWeights, Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading atomic weight data");

    let elements = {
        let file = File::open(path)?;
        read_elements(BufReader::new(file))?
    };
    Ok(AtomicWeights::from_elements(elements))
}

fn read_elements<R: BufRead>(reader: R) -> Result<Vec<Element>, Error> {
    let mut elements = Vec::new();

    for record in records(ascii_lines(reader)) {
        let record = record?;
        let element = Element::from_fields(&record.fields)
            .map_err(|e| Error::field(record.line, record.text.as_str(), e))?;

        debug!(
            line = record.line,
            symbol = element.symbol(),
            atomic_number = element.atomic_number(),
            replacements = element.replacements().len(),
            "parsed element"
        );
        elements.push(element);
    }

    Ok(elements)
}

/// Splits the source into lines, dropping every non-ASCII byte. Text that is
/// not valid UTF-8 therefore never fails the read.
fn ascii_lines<R: BufRead>(reader: R) -> impl Iterator<Item = std::io::Result<String>> {
    reader.split(b'\n').map(|line| {
        line.map(|bytes| {
            bytes
                .into_iter()
                .filter(u8::is_ascii)
                .map(char::from)
                .collect::<String>()
        })
    })
}
