use core::fmt;

/**
A cluster of short options, such as the `xyz` in `-xyz`. A cluster always has
at least one option; the lexer never produces an empty one (a lone `-` is a
value).

Walking a cluster yields each option byte along with the rest of the cluster
after it, which is what a short option taking an attached value (`-ovalue`)
needs.
*/
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Shorts<'arg> {
    option: u8,
    rest: &'arg [u8],
    bytes: &'arg [u8],
}

impl<'arg> Shorts<'arg> {
    /// Create a cluster from the bytes after the leading `-`, or `None` if
    /// there aren't any.
    #[inline]
    #[must_use]
    pub fn new(bytes: &'arg [u8]) -> Option<Self> {
        let (&option, rest) = bytes.split_first()?;
        Some(Self {
            option,
            rest,
            bytes,
        })
    }

    /// The current option byte
    #[inline]
    #[must_use]
    pub const fn option(&self) -> u8 {
        self.option
    }

    /// Everything in the cluster after the current option
    #[inline]
    #[must_use]
    pub const fn rest(&self) -> &'arg [u8] {
        self.rest
    }

    #[inline]
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.rest.is_empty()
    }

    /// The cluster starting at the following option, if any
    #[inline]
    #[must_use]
    pub fn advance(self) -> Option<Self> {
        Self::new(self.rest)
    }

    /// The whole remaining cluster, including the current option
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &'arg [u8] {
        self.bytes
    }
}

impl fmt::Debug for Shorts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{:?}", crate::Arg::new(self.bytes()))
    }
}
