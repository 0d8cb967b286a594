use core::fmt::{self, Debug, Write};

/**
A single raw token (or part of one) passed in from the command line.

Given `--target=foo input.txt`, `target`, `foo`, and `input.txt` would each be
handed to the [`Visitor`][crate::Visitor] as an [`Arg`].

An [`Arg`] internally is just a byte slice, since that's what the OS gives us.
[`as_str`][Arg::as_str] provides the UTF-8 view when there is one.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arg<'arg>(&'arg [u8]);

impl<'arg> Arg<'arg> {
    #[inline]
    #[must_use]
    pub const fn new(bytes: &'arg [u8]) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &'arg [u8] {
        self.0
    }

    /// The token as a string, if it's valid UTF-8.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&'arg str> {
        core::str::from_utf8(self.0).ok()
    }
}

impl PartialEq<str> for Arg<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

/**
Debug-print an arg. Valid UTF-8 runs are printed as quoted strings; invalid
bytes are printed in hex.
 */
impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
            f.write_char('[')?;

            let mut bytes = bytes.iter().copied();

            if let Some(b) = bytes.next() {
                write!(f, "{b:#x}")?;
                bytes.try_for_each(|b| write!(f, ",{b:#x}"))?;
            }

            f.write_char(']')
        }

        if self.0.is_empty() {
            return f.write_str("\"\"");
        }

        self.0.utf8_chunks().enumerate().try_for_each(|(i, chunk)| {
            if i > 0 {
                f.write_str("..")?;
            }

            match (chunk.valid(), chunk.invalid()) {
                (valid, b"") => write!(f, "{valid:?}"),
                ("", invalid) => write_bytes(f, invalid),
                (valid, invalid) => {
                    write!(f, "{valid:?}..")?;
                    write_bytes(f, invalid)
                }
            }
        })
    }
}
