use super::error::Error;
use std::io;

/// Number of leading fields every data line carries.
pub const REQUIRED_FIELDS: usize = 4;

/// One data line, split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source.
    pub line: usize,
    /// Source text with any inline comment removed.
    pub text: String,
    pub fields: Vec<String>,
}

/// Lazily turns raw lines into [`Record`]s, skipping blanks and comments.
///
/// Created by [`records`].
pub struct Records<I> {
    lines: I,
    line_no: usize,
}

pub fn records<I>(lines: I) -> Records<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    Records {
        lines: lines.into_iter(),
        line_no: 0,
    }
}

impl<I> Iterator for Records<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.lines.next()?;
            self.line_no += 1;
            let raw = match next {
                Ok(raw) => raw,
                Err(source) => return Some(Err(Error::Io { source })),
            };

            if let Some(record) = parse_line(self.line_no, &raw).transpose() {
                return Some(record);
            }
        }
    }
}

/// Parses a single line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Record>, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let content = trimmed.split('#').next().unwrap_or_default();
    let text: String = content.trim_end().chars().filter(char::is_ascii).collect();

    let fields: Vec<String> = text.split(',').map(str::to_string).collect();

    if fields.len() < REQUIRED_FIELDS {
        return Err(Error::malformed(
            line_no,
            text,
            format!(
                "not enough data (expected at least {REQUIRED_FIELDS} fields, found {})",
                fields.len()
            ),
        ));
    }

    let extra = fields.len() - REQUIRED_FIELDS;
    if extra % 2 != 0 {
        return Err(Error::malformed(
            line_no,
            text,
            format!(
                "the number of fields after the first {REQUIRED_FIELDS} must be a multiple of 2 (found {extra})"
            ),
        ));
    }

    Ok(Some(Record {
        line: line_no,
        text,
        fields,
    }))
}
