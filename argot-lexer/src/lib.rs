#![no_std]

/*!
Low-level classification of command-line tokens. Decides, one raw argument at
a time, whether a token is a long option, a long option with an inline value,
a cluster of short options, or a plain value. No type handling and no grouping
of values with keys happens here; that's the job of the caller's [`Visitor`].
*/

#[cfg(test)]
extern crate std;

mod arg;
mod shorts;

pub use arg::Arg;
pub use shorts::Shorts;

/**
The [`Lexer`] operates by passing each token it finds into a [`Visitor`], to
be handled.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A plain value, such as `input.txt`, `-5`, or `-`.
    fn visit_value(self, value: Arg<'arg>) -> Self::Value;

    /// A long option without an inline value, such as `--option`
    fn visit_long(self, option: Arg<'arg>) -> Self::Value;

    /// A long option given as `--option=value`. The value may be empty.
    fn visit_long_value(self, option: Arg<'arg>, value: Arg<'arg>) -> Self::Value;

    /// A cluster of one or more short options, such as `-x` or `-xyz`
    fn visit_shorts(self, shorts: Shorts<'arg>) -> Self::Value;

    /**
    Report whether `option` is a known short option. The lexer only asks this
    for ASCII digits: a token like `-5` is a short option when `5` is declared
    as one, and a negative number otherwise.
    */
    fn is_short_option(&self, option: u8) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Options,

    /// A raw `--` was seen; everything after it is a value.
    ValuesOnly,
}

/**
A `Lexer` is the main entry point into `argot_lexer`. Each call to
[`next_token`][Lexer::next_token] classifies one argument and sends it to the
given [`Visitor`].

The lexer operates entirely on borrowed data, because we assume that
command-line arguments are loaded once and then handled in a borrowed form.
The ubiquitous `'arg` lifetime refers to this borrowed command line data.
*/
#[derive(Debug, Clone)]
pub struct Lexer<I> {
    mode: Mode,
    args: I,
}

impl<'arg, I> Lexer<I>
where
    I: Iterator<Item = &'arg [u8]>,
{
    /**
    Create a new [`Lexer`] from an iterator of byte slices, where each byte
    slice is a single argument received from the command line. This list
    should *exclude* the name of the program.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            mode: Mode::Options,
            args: args.into_iter(),
        }
    }

    /// True once a raw `--` has been consumed.
    #[inline]
    #[must_use]
    pub fn values_only(&self) -> bool {
        self.mode == Mode::ValuesOnly
    }

    /// Classify the next token, returning `None` when the arguments are
    /// exhausted. A raw `--` is consumed silently.
    pub fn next_token<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        loop {
            let argument = self.args.next()?;

            if self.mode == Mode::ValuesOnly {
                return Some(visitor.visit_value(Arg::new(argument)));
            }

            return Some(match argument {
                b"--" => {
                    self.mode = Mode::ValuesOnly;
                    continue;
                }
                [b'-', b'-', option @ ..] => match split_once(option, b'=') {
                    Some((option, value)) => {
                        visitor.visit_long_value(Arg::new(option), Arg::new(value))
                    }
                    None => visitor.visit_long(Arg::new(option)),
                },
                [b'-', digit, ..] if digit.is_ascii_digit() && !visitor.is_short_option(*digit) => {
                    visitor.visit_value(Arg::new(argument))
                }
                [b'-', shorts @ ..] => match Shorts::new(shorts) {
                    Some(shorts) => visitor.visit_shorts(shorts),
                    None => visitor.visit_value(Arg::new(argument)),
                },
                value => visitor.visit_value(Arg::new(value)),
            });
        }
    }
}

fn split_once(input: &[u8], delimiter: u8) -> Option<(&[u8], &[u8])> {
    memchr::memchr(delimiter, input).map(|i| (&input[..i], &input[i + 1..]))
}
