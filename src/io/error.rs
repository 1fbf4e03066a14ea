//! # Error reporting for reading of transportation problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into a transportation problem.
    ///
    /// # Note
    ///
    /// If the problem is not balanced, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    Parse(Parse),
    /// There is a logical inconsistency in the problem described by a file.
    ///
    /// For example, the number of cost rows might differ from the number of origins.
    Inconsistency(Inconsistency),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::FileExtension(description) => description.fmt(f),
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
            Import::Inconsistency(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::FileExtension(_) => None,
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
            Import::Inconsistency(error) => Some(error),
        }
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

impl From<Inconsistency> for Import {
    fn from(error: Inconsistency) -> Self {
        Import::Inconsistency(error)
    }
}

/// A `Parse` error represents all errors encountered during parsing.
///
/// It may recursively hold more `Parse` errors to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct Parse {
    description: String,
    source: Option<Source>,
}

/// Describes the cause of a `Parse` error.
///
/// It can be either a file line number and line contents, or another `Parse` error with its own
/// description and optionally, a cause.
#[derive(Debug)]
enum Source {
    FileLocation(usize, String),
    Nested(Box<Parse>),
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (usize, &'a str);

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `Parse` error caused at a location in the file.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub(crate) fn with_file_location(
        description: impl Into<String>,
        (line_number, line): FileLocation,
    ) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `Parse` error around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `cause`: What caused this error.
    pub fn with_cause(description: impl Into<String>, cause: Parse) -> Self {
        Self {
            description: description.into(),
            source: Some(Source::Nested(Box::new(cause))),
        }
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<usize> {
        match &self.source {
            Some(Source::FileLocation(line_number, _)) => Some(*line_number),
            Some(Source::Nested(cause)) => cause.line_number(),
            None => None,
        }
    }

    /// Get all descriptions in the chain, starting with this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(Source::FileLocation(line_number, line)) => {
                descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
            }
            Some(Source::Nested(cause)) => descriptions.extend(cause.chain_description()),
            None => {}
        }

        descriptions
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for Parse {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(Source::Nested(cause)) => Some(&**cause),
            _ => None,
        }
    }
}

/// An `Inconsistency` error is returned when the problem is inconsistently represented in the
/// file.
///
/// This error is not returned when the problem is not balanced. It is meant only for descriptions
/// of problems, and should not be used after the importing process.
#[derive(Debug)]
pub struct Inconsistency {
    description: String,
}

impl Inconsistency {
    /// Wrap a text in an `Inconsistency` error.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

impl Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InconsistencyError: {}", self.description)
    }
}

impl Error for Inconsistency {}
