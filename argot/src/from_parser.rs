/*!
Typed extraction of parse results. Usually [`FromParser`] is derived with
[`#[derive(FromParser)]`][crate::FromParser], which reads each field from the
argument of the same name (in kebab-case) and each
`#[argot(subcommand = "...")]` field from the named subcommand's parser.
 */

use crate::{errors::Error, parser::Parser};

/// A type that can be built from the results of a completed parse.
pub trait FromParser: Sized {
    fn from_parser(parser: &Parser) -> Result<Self, Error>;
}

/// A subcommand's results: `Some` only if that subcommand was parsed.
impl<T: FromParser> FromParser for Option<T> {
    fn from_parser(parser: &Parser) -> Result<Self, Error> {
        match parser.is_parsed() {
            true => T::from_parser(parser).map(Some),
            false => Ok(None),
        }
    }
}
