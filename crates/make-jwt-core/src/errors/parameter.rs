// ABOUTME: Non-fatal parameter file error types
// ABOUTME: Describes malformed lines, unknown names, bad values and unreadable files

use std::io;
use std::path::PathBuf;

/// Problems encountered while reading a parameter file.
///
/// None of these abort issuance: the reader and the parameter store log them
/// as warnings and carry on with the next line or the next source.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ParameterFileError {
    /// The file exists but could not be opened or read
    #[error("unable to read parameter file {}: {source}", path.display())]
    Unreadable {
        /// Parameter file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line is not of the form `name=value`
    #[error("{}:{line}: malformed parameter line: {content:?}", path.display())]
    MalformedLine {
        /// Parameter file path
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Raw line content
        content: String,
    },

    /// The parameter name is not one of the recognised names
    #[error("unrecognized parameter name: {name}")]
    UnrecognizedName {
        /// Name as written in the file
        name: String,
    },

    /// The value could not be converted to the parameter's type
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },
}
