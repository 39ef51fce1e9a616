use super::error::{ParseError, ParseErrorKind};
use std::io::{self, BufRead};
use std::path::Path;

/// A trimmed, non-comment line together with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ContentLine {
    pub number: usize,
    pub text: String,
}

/// Yields the content lines of a reader: surrounding whitespace is stripped, and blank
/// lines and lines starting with `#` are skipped.
///
/// A line that is not valid UTF-8 is reported as [`ParseError::Malformed`] with its
/// physical line number; read failures become [`ParseError::Io`].
pub(crate) fn content_lines<'a>(
    reader: &'a mut impl BufRead,
    origin: &'a Path,
) -> impl Iterator<Item = Result<ContentLine, ParseError>> + 'a {
    let mut number = 0;
    let mut buf = Vec::new();
    std::iter::from_fn(move || {
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    number += 1;
                    let Ok(raw) = std::str::from_utf8(&buf) else {
                        return Some(Err(ParseError::Malformed {
                            file: origin.to_path_buf(),
                            line: number,
                            content: String::from_utf8_lossy(&buf).trim().to_string(),
                            kind: ParseErrorKind::InvalidUtf8,
                        }));
                    };
                    let trimmed = raw.trim();
                    if trimmed.is_empty() || trimmed.starts_with('#') {
                        continue;
                    }
                    return Some(Ok(ContentLine {
                        number,
                        text: trimmed.to_string(),
                    }));
                }
                Err(e) => return Some(Err(io_error(origin, e))),
            }
        }
    })
}

/// Field access for one content line, producing errors that carry the file and line.
pub(crate) struct LineFields<'a> {
    file: &'a Path,
    line: &'a ContentLine,
}

impl<'a> LineFields<'a> {
    pub fn new(file: &'a Path, line: &'a ContentLine) -> Self {
        Self { file, line }
    }

    pub fn split<const N: usize>(&self) -> Result<[&'a str; N], ParseError> {
        let line: &'a ContentLine = self.line;
        let fields: Vec<&'a str> = line.text.split_whitespace().collect();
        <[&'a str; N]>::try_from(fields).map_err(|fields| {
            self.malformed(ParseErrorKind::FieldCount {
                expected: N,
                found: fields.len(),
            })
        })
    }

    pub fn int(&self, field: &'static str, value: &str) -> Result<isize, ParseError> {
        value.parse().map_err(|_| {
            self.malformed(ParseErrorKind::InvalidInt {
                field,
                value: value.to_string(),
            })
        })
    }

    pub fn float(&self, field: &'static str, value: &str) -> Result<f64, ParseError> {
        value.parse().map_err(|_| {
            self.malformed(ParseErrorKind::InvalidFloat {
                field,
                value: value.to_string(),
            })
        })
    }

    pub fn malformed(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::Malformed {
            file: self.file.to_path_buf(),
            line: self.line.number,
            content: self.line.text.clone(),
            kind,
        }
    }
}

pub(crate) fn io_error(file: &Path, source: io::Error) -> ParseError {
    ParseError::Io {
        file: file.to_path_buf(),
        source,
    }
}
