// ABOUTME: Reader for the line-oriented name=value parameter file format
// ABOUTME: Streams pairs lazily, reporting malformed lines without aborting the scan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 make-jwt contributors

//! Parameter file reader
//!
//! A parameter file holds one `name=value` pair per line. Blank lines and
//! lines starting with `#` are ignored. Names and values are trimmed, and a
//! value may itself contain `=`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use make_jwt_core::ParameterFileError;

/// Result of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Nothing to do: blank or comment
    Skip,
    /// A `name=value` pair
    Pair(&'a str, &'a str),
    /// Anything else
    Malformed,
}

/// Parse one line of a parameter file
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return ParsedLine::Skip;
    }

    match line.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            ParsedLine::Pair(name.trim(), value.trim())
        }
        _ => ParsedLine::Malformed,
    }
}

/// Open parameter file yielding `(name, value)` pairs.
///
/// The file handle lives inside the iterator and is closed when it is dropped.
pub struct ParamFile {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
    finished: bool,
}

impl ParamFile {
    /// Open `path` for reading.
    ///
    /// Returns `Ok(None)` when the file does not exist, which is normal since
    /// parameter files are optional.
    ///
    /// # Errors
    ///
    /// Returns `ParameterFileError::Unreadable` if the file exists but cannot
    /// be opened (permissions, directory in the way, ...).
    pub fn open(path: impl AsRef<Path>) -> Result<Option<Self>, ParameterFileError> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Ok(Some(Self {
                path: path.to_path_buf(),
                lines: BufReader::new(file).lines(),
                line_number: 0,
                finished: false,
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ParameterFileError::Unreadable {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Path this reader was opened on
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, content: String) -> ParameterFileError {
        ParameterFileError::MalformedLine {
            path: self.path.clone(),
            line: self.line_number,
            content,
        }
    }
}

impl Iterator for ParamFile {
    type Item = Result<(String, String), ParameterFileError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    self.line_number += 1;
                    return Some(Err(self.malformed("<invalid UTF-8>".to_owned())));
                }
                Err(source) => {
                    self.finished = true;
                    return Some(Err(ParameterFileError::Unreadable {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            self.line_number += 1;

            match parse_line(&line) {
                ParsedLine::Skip => {}
                ParsedLine::Pair(name, value) => {
                    return Some(Ok((name.to_owned(), value.to_owned())));
                }
                ParsedLine::Malformed => return Some(Err(self.malformed(line.clone()))),
            }
        }
        None
    }
}
