/*!
The dispatcher. Drives the lexer over a span of command-line tokens, gathers
values into groups behind the key that opened them, and hands each finished
group to the assignment engine. A group is finished by the next key or by the
end of the span.
 */

use core::mem;
use std::ffi::OsString;

use argot_lexer::{Arg, Lexer, Shorts, Visitor};

use crate::{assign, errors::Error, table::Table};

/// Whether dispatch ran to completion or stopped at the help key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Help,
}

/// The key that the pending values belong to
#[derive(Debug, Clone, Copy)]
enum Open<'arg> {
    /// No key yet; values go to the positional arguments
    Nothing,
    Long(&'arg str),
    Shorts(Shorts<'arg>),
}

struct Session<'t, 'arg> {
    table: &'t mut Table,
    open: Open<'arg>,
    values: Vec<&'arg str>,
}

fn lossy(arg: Arg<'_>) -> String {
    String::from_utf8_lossy(arg.bytes()).into_owned()
}

fn long_name(option: Arg<'_>) -> Result<&str, Error> {
    option.as_str().ok_or_else(|| Error::Unrecognized {
        key: format!("--{}", lossy(option)),
    })
}

impl<'arg> Session<'_, 'arg> {
    /// The name to blame for a bad value in the current group
    fn blame(&self) -> String {
        match self.open {
            Open::Nothing => "positional".to_owned(),
            Open::Long(name) => format!("--{name}"),
            Open::Shorts(shorts) => format!("-{}", String::from_utf8_lossy(shorts.bytes())),
        }
    }

    /// Finish the current group and assign its values.
    fn flush(&mut self) -> Result<Flow, Error> {
        let values = mem::take(&mut self.values);
        let open = mem::replace(&mut self.open, Open::Nothing);

        log::debug!("flushing {open:?} with {values:?}");

        match open {
            Open::Nothing => {
                assign::forward(&mut self.table.positionals, &values).map(|()| Flow::Continue)
            }
            Open::Long(name) => self.assign_long(name, &values),
            Open::Shorts(shorts) => self.assign_shorts(shorts, &values),
        }
    }

    fn assign_long(&mut self, name: &str, values: &[&str]) -> Result<Flow, Error> {
        if self.table.is_help_long(name) {
            return Ok(Flow::Help);
        }

        let index = self
            .table
            .find_long(name)
            .ok_or_else(|| Error::Unrecognized {
                key: format!("--{name}"),
            })?;

        assign::assign_option(self.table, index, values).map(|()| Flow::Continue)
    }

    /**
    Assign a cluster like `-abc`. Every option before the last one is either
    a flag, set with no values, or an option that takes the rest of the
    cluster as its first value (`-c234.86`). The last option gets the pending
    values.
    */
    fn assign_shorts(&mut self, shorts: Shorts<'arg>, values: &[&'arg str]) -> Result<Flow, Error> {
        let mut cluster = Some(shorts);

        while let Some(current) = cluster {
            let option = current.option();

            if self.table.is_help_short(option) {
                return Ok(Flow::Help);
            }

            let index = self
                .table
                .find_short(option)
                .ok_or_else(|| Error::Unrecognized {
                    key: format!("-{}", char::from(option)),
                })?;

            if current.is_last() {
                return assign::assign_option(self.table, index, values).map(|()| Flow::Continue);
            }

            if self.table.options[index].is_flag() {
                assign::assign_option(self.table, index, &[])?;
                cluster = current.advance();
                continue;
            }

            let attached = Arg::new(current.rest());
            let attached = attached.as_str().ok_or_else(|| Error::InvalidUtf8 {
                name: format!("-{}", char::from(option)),
                value: lossy(attached),
            })?;

            let group: Vec<&str> = [attached].into_iter().chain(values.iter().copied()).collect();
            return assign::assign_option(self.table, index, &group).map(|()| Flow::Continue);
        }

        Ok(Flow::Continue)
    }

    /// Start a new group behind `open`, finishing the previous one first.
    fn open(&mut self, open: Open<'arg>) -> Result<Flow, Error> {
        let flow = self.flush()?;
        self.open = open;
        Ok(flow)
    }
}

impl<'arg> Visitor<'arg> for &mut Session<'_, 'arg> {
    type Value = Result<Flow, Error>;

    fn visit_value(self, value: Arg<'arg>) -> Self::Value {
        log::trace!("value {value:?}");

        let value = value.as_str().ok_or_else(|| Error::InvalidUtf8 {
            name: self.blame(),
            value: lossy(value),
        })?;

        self.values.push(value);
        Ok(Flow::Continue)
    }

    fn visit_long(self, option: Arg<'arg>) -> Self::Value {
        log::trace!("long option {option:?}");

        let name = long_name(option)?;
        self.open(Open::Long(name))
    }

    fn visit_long_value(self, option: Arg<'arg>, value: Arg<'arg>) -> Self::Value {
        log::trace!("long option {option:?} = {value:?}");

        let name = long_name(option)?;
        let flow = self.open(Open::Long(name))?;
        self.visit_value(value)?;
        Ok(flow)
    }

    fn visit_shorts(self, shorts: Shorts<'arg>) -> Self::Value {
        log::trace!("short options {shorts:?}");

        self.open(Open::Shorts(shorts))
    }

    fn is_short_option(&self, option: u8) -> bool {
        self.table.is_short_option(option)
    }
}

/// Dispatch `args` (which exclude the program name) into `table`.
pub(crate) fn dispatch(table: &mut Table, args: &[OsString]) -> Result<Flow, Error> {
    let mut session = Session {
        table,
        open: Open::Nothing,
        values: Vec::new(),
    };

    let mut lexer = Lexer::new(args.iter().map(|arg| arg.as_encoded_bytes()));

    while let Some(flow) = lexer.next_token(&mut session) {
        if flow? == Flow::Help {
            return Ok(Flow::Help);
        }
    }

    session.flush()
}
