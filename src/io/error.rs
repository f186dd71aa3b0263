//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// There is a logical inconsistency in the linear program described by a file.
    LinearProgram(InconsistencyError),
}

impl Display for Import {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::LinearProgram(error) => error.fmt(f),
        }
    }
}

/// Displays as the wrapped error, so the chain continues with that error's source.
impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::IO(error) => error.source(),
            Import::Parse(error) => error.source(),
            Import::LinearProgram(_) => None,
        }
    }
}

impl From<io::Error> for Import {
    fn from(error: io::Error) -> Self {
        Import::IO(error)
    }
}

impl From<ParseError> for Import {
    fn from(error: ParseError) -> Self {
        Import::Parse(error)
    }
}

impl From<InconsistencyError> for Import {
    fn from(error: InconsistencyError) -> Self {
        Import::LinearProgram(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a file location containing a line number, column and line, at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file location, or another `ParseError` with its own description and
/// optionally, a cause.
#[derive(Debug, Eq, PartialEq)]
enum ParseErrorSource {
    FileLocation {
        line_number: u64,
        column: usize,
        line: String,
    },
    Nested(Box<ParseError>),
}

/// A `FileLocation` references a position in the file: the line number (starting at 1), the
/// column (starting at 1) and the contents of that line.
pub type FileLocation<'a> = (u64, usize, &'a str);

/// Convenience alias, as all parsing functions return this.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: Line number, column and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, column, line) = file_location;
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::FileLocation { line_number, column, line: line.to_string() }),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// The (line number, column) at which the error was caused, if known.
    ///
    /// Follows the chain of causes.
    pub fn location(&self) -> Option<(u64, usize)> {
        match &self.source {
            Some(ParseErrorSource::FileLocation { line_number, column, .. }) => Some((*line_number, *column)),
            Some(ParseErrorSource::Nested(error)) => error.location(),
            None => None,
        }
    }
}

/// Only this level of the chain, the nested errors are reached through `source`.
impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        if let Some(ParseErrorSource::FileLocation { line_number, column, line }) = &self.source {
            write!(f, "\n\tCaused at line {}, column {}:\t{}", line_number, column, line)?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// An `InconsistencyError` is returned when a linear program is described inconsistently.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs, and should not be used after the importing process.
#[derive(Debug, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for InconsistencyError {}
