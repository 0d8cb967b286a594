/*!
Error types for [`argot`][crate]. [`Error`] covers everything that can go wrong
while parsing or reading results; [`ConfigError`] covers mistakes in the
declarations themselves, caught by [`ParserBuilder::build`][crate::ParserBuilder::build].
 */

use crate::value::ValueKind;

/// The broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The user's input didn't match the declared arguments
    InvalidArgument,

    /// A validator rejected a value
    Validation,

    /// The parser was used in the wrong order, or asked for something it
    /// doesn't have
    Parse,

    /// An internal invariant was violated; this is a bug in argot
    Internal,

    /// The help key was given. Not really a failure, but it stops the parse.
    HelpRequested,
}

/// Errors that can occur while parsing arguments or reading the results.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An exactly-one argument appeared with no value
    #[error("Argument {name}: should take exactly one value but zero")]
    MissingValue { name: String },

    /// A one-or-more argument appeared with no values
    #[error("Argument {name}: should take more than one value")]
    MissingValues { name: String },

    /// An exactly-N argument got fewer than N values
    #[error("Argument {name}: invalid argument {values:?}")]
    TooFewValues {
        name: String,
        expected: usize,
        values: Vec<String>,
    },

    /// An argument that was already assigned appeared again
    #[error("Argument {name}: duplicated argument")]
    Duplicated { name: String },

    /// A flag was given values and there are no positional arguments to
    /// receive them
    #[error("Flag {name} can not take value")]
    FlagGotValue { name: String },

    /// A key that doesn't correspond to any declared argument
    #[error("Invalid argument {key}")]
    Unrecognized { key: String },

    /// Values appeared where only positional arguments could take them, but
    /// none are declared
    #[error("Invalid positional argument: {values:?}")]
    UnexpectedPositional { values: Vec<String> },

    /// Values were left over after every positional argument was filled
    #[error("Duplicated positional argument: {values:?}")]
    ExtraPositional { values: Vec<String> },

    /// A value couldn't be converted to the argument's type
    #[error("Argument {name}: {value} cannot convert {kind}")]
    Cast {
        name: String,
        value: String,
        kind: ValueKind,
    },

    /// A token wasn't valid UTF-8
    #[error("Argument {name}: {value} is not valid utf-8")]
    InvalidUtf8 { name: String, value: String },

    /// A validator rejected a value
    #[error("Option {name} has invalid value {value}")]
    Validation { name: String, value: String },

    /// Required arguments were never assigned
    #[error("Required {names:?}")]
    Required { names: Vec<String> },

    /// The parser was asked for results before a successful parse
    #[error("Parser did not parse argument, call parse first")]
    NotParsed,

    /// The parser already completed a parse; call
    /// [`reset_args`][crate::Parser::reset_args] first
    #[error("Cannot parse twice")]
    AlreadyParsed,

    /// Some arguments still hold values from a previous, failed parse
    #[error("keys {names:?} already assigned")]
    AlreadyAssigned { names: Vec<String> },

    /// A result was requested for a name that was never declared
    #[error("Argument {name} is not declared")]
    UnknownName { name: String },

    /// A result was requested as a type that doesn't match its declaration
    #[error("Argument {name}: stored {found} cannot be read as {requested}")]
    TypeMismatch {
        name: String,
        found: String,
        requested: &'static str,
    },

    /// Something that configuration-time checks should have prevented
    #[error("internal parser error: {message}")]
    Internal { message: String },

    /// The help key was given. `help` is the rendered help text.
    #[error("help was requested")]
    HelpRequested { help: String },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::NotParsed
            | Error::AlreadyParsed
            | Error::AlreadyAssigned { .. }
            | Error::UnknownName { .. }
            | Error::TypeMismatch { .. } => ErrorKind::Parse,
            Error::Internal { .. } => ErrorKind::Internal,
            Error::HelpRequested { .. } => ErrorKind::HelpRequested,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// The rendered help text, if this error is a help request
    #[must_use]
    pub fn help(&self) -> Option<&str> {
        match self {
            Error::HelpRequested { help } => Some(help),
            _ => None,
        }
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Error::Internal {
            message: message.into(),
        }
    }
}

/// Mistakes in argument declarations, reported by
/// [`ParserBuilder::build`][crate::ParserBuilder::build].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("argument names must not be empty")]
    EmptyName,

    #[error("argument name {name:?} must not start with '-' or contain '='")]
    InvalidName { name: String },

    #[error("argument name {name:?} is declared more than once")]
    DuplicateName { name: String },

    #[error("short option -{short} is declared more than once")]
    DuplicateShort { short: char },

    /// Short options must be printable ASCII other than `-`
    #[error("short option {short:?} of {name:?} must be printable ascii other than '-'")]
    InvalidShort { name: String, short: char },

    #[error("argument {name:?}: nargs must be '?', '*', '+', or a number greater than 0")]
    ZeroNargs { name: String },

    #[error("argument {name:?}: array of {len} needs nargs {len}, not {nargs}")]
    ArrayNargs {
        name: String,
        len: usize,
        nargs: String,
    },

    #[error("argument {name:?}: arrays and tuples need more than one element")]
    SingleElement { name: String },

    #[error("argument {name:?}: a list can't take nargs {nargs}")]
    ListNargs { name: String, nargs: String },

    #[error("argument {name:?}: tuple of {len} needs nargs {len}, not {nargs}")]
    TupleNargs {
        name: String,
        len: usize,
        nargs: String,
    },

    #[error("positional argument {name:?} can't take nargs {nargs}")]
    PositionalNargs { name: String, nargs: String },

    #[error("positional arguments {first:?} and {second:?} both take an unbounded number of values")]
    UnboundedPositionals { first: String, second: String },

    #[error("argument {name:?}: default value {value} doesn't fit the argument's type")]
    DefaultMismatch { name: String, value: String },

    #[error("subcommand {name:?} is declared more than once")]
    DuplicateSubcommand { name: String },
}
