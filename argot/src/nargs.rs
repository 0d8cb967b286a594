use core::fmt;

/// How many values an argument takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NArgs {
    /// Exactly this many values
    Exact(usize),

    /// Zero or one value (`?`)
    Optional,

    /// Any number of values (`*`)
    ZeroOrMore,

    /// At least one value (`+`)
    OneOrMore,
}

impl From<usize> for NArgs {
    #[inline]
    fn from(count: usize) -> Self {
        NArgs::Exact(count)
    }
}

/// A character other than `?`, `*`, or `+` was used as an arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not an arity; expected '?', '*', or '+'")]
pub struct UnknownNArgs(pub char);

impl TryFrom<char> for NArgs {
    type Error = UnknownNArgs;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '?' => Ok(NArgs::Optional),
            '*' => Ok(NArgs::ZeroOrMore),
            '+' => Ok(NArgs::OneOrMore),
            symbol => Err(UnknownNArgs(symbol)),
        }
    }
}

impl fmt::Display for NArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NArgs::Exact(count) => write!(f, "{count}"),
            NArgs::Optional => f.write_str("?"),
            NArgs::ZeroOrMore => f.write_str("*"),
            NArgs::OneOrMore => f.write_str("+"),
        }
    }
}
