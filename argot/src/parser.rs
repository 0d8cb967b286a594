/*!
The [`Parser`]: a table of declared arguments, a list of subcommands, and the
runtime that fills the table from a command line.
 */

use core::fmt;
use std::{
    ffi::OsString,
    io::{self, Write as _},
    process,
};

use crate::{
    builder::ParserBuilder,
    dispatch::{self, Flow},
    errors::Error,
    from_parser::FromParser,
    help::Help,
    table::Table,
    value::{self, FromValue, Value},
};

/// Presentation metadata used when rendering help
#[derive(Debug, Clone, Default)]
pub(crate) struct ParserInfo {
    pub program_name: Option<String>,
    pub description: Option<String>,

    /// Replaces the entire help message
    pub help: Option<String>,

    pub usage: Option<String>,
    pub subcommand_help: Option<String>,
    pub positional_help: Option<String>,
    pub options_help: Option<String>,
}

pub(crate) struct Subcommand {
    pub name: String,
    pub description: String,
    pub parser: Parser,
}

/// What to do when the help key shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HelpMode {
    /// Print help to stdout and exit the process with status 0
    Exit,

    /// Return [`Error::HelpRequested`] with the rendered help
    Return,
}

/**
A command-line parser. Build one with [`Parser::builder`], then call
[`parse`][Parser::parse] (or [`try_parse`][Parser::try_parse]) and read the
results with [`get`][Parser::get].

A parser owns the storage for its arguments, so parsers built separately never
share state, even when they're declared identically. A parser parses once;
call [`reset_args`][Parser::reset_args] to parse again.
*/
pub struct Parser {
    pub(crate) info: ParserInfo,
    pub(crate) table: Table,
    pub(crate) subcommands: Vec<Subcommand>,

    /// `argv[0]` from the most recent parse
    argv0: Option<String>,
    parsed: bool,
}

impl Parser {
    #[must_use]
    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub(crate) fn new(info: ParserInfo, table: Table, subcommands: Vec<Subcommand>) -> Self {
        Self {
            info,
            table,
            subcommands,
            argv0: None,
            parsed: false,
        }
    }

    /**
    Parse a command line. `args` includes the program name as its first
    element.

    If the help key appears, the help message is printed to stdout and the
    process exits with status 0. Use [`try_parse`][Parser::try_parse] to
    handle that case yourself.
    */
    pub fn parse<I>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        self.run(&args, HelpMode::Exit)
    }

    /// Parse a command line, returning [`Error::HelpRequested`] (carrying
    /// uncolored help text) instead of exiting when the help key appears.
    pub fn try_parse<I>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        self.run(&args, HelpMode::Return)
    }

    /// Parse the process's own command line. See [`parse`][Parser::parse].
    pub fn parse_env(&mut self) -> Result<(), Error> {
        self.parse(std::env::args_os())
    }

    fn run(&mut self, args: &[OsString], mode: HelpMode) -> Result<(), Error> {
        if self.parsed {
            return Err(Error::AlreadyParsed);
        }

        let names = self.table.assigned_names();
        if !names.is_empty() {
            return Err(Error::AlreadyAssigned { names });
        }

        if let Some(argv0) = args.first() {
            self.argv0 = Some(argv0.to_string_lossy().into_owned());
        }

        let tokens = args.get(1..).unwrap_or(&[]);

        // The last token that names a subcommand splits the command line;
        // everything from there on belongs to the subcommand.
        let route = tokens
            .iter()
            .enumerate()
            .rev()
            .find_map(|(position, token)| {
                self.subcommands
                    .iter()
                    .position(|subcommand| token.as_os_str() == subcommand.name.as_str())
                    .map(|index| (position, index))
            });

        let own = match route {
            Some((position, _)) => &tokens[..position],
            None => tokens,
        };

        if dispatch::dispatch(&mut self.table, own)? == Flow::Help {
            return self.show_help(mode);
        }

        let names = self.table.missing_required();
        if !names.is_empty() {
            log::debug!("missing required arguments: {names:?}");
            return Err(Error::Required { names });
        }

        if let Some((position, index)) = route {
            let subcommand = &mut self.subcommands[index];
            log::debug!("routing {:?} to subcommand {}", &tokens[position..], subcommand.name);
            subcommand.parser.run(&tokens[position..], mode)?;
        }

        self.parsed = true;
        Ok(())
    }

    fn show_help(&self, mode: HelpMode) -> Result<(), Error> {
        match mode {
            HelpMode::Return => Err(Error::HelpRequested {
                help: self.format_help(true),
            }),
            HelpMode::Exit => {
                let mut stdout = io::stdout().lock();
                // Nothing useful can be done about a broken stdout here.
                let _ = writeln!(stdout, "{}", self.help(false));
                let _ = stdout.flush();
                process::exit(0)
            }
        }
    }

    fn descriptor_value(&self, name: &str) -> Result<&Value, Error> {
        if !self.parsed {
            return Err(Error::NotParsed);
        }

        self.table
            .find(name)
            .map(|descriptor| &descriptor.value)
            .ok_or_else(|| Error::UnknownName {
                name: name.to_owned(),
            })
    }

    /// Read the result for the argument called `name` as a `T`.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, Error> {
        let value = self.descriptor_value(name)?;
        value::read(name, value)
    }

    /// The raw stored result for the argument called `name`
    pub fn value(&self, name: &str) -> Result<&Value, Error> {
        self.descriptor_value(name)
    }

    /// Whether the argument called `name` was given on the command line
    pub fn is_assigned(&self, name: &str) -> Result<bool, Error> {
        if !self.parsed {
            return Err(Error::NotParsed);
        }

        self.table
            .find(name)
            .map(|descriptor| descriptor.assigned)
            .ok_or_else(|| Error::UnknownName {
                name: name.to_owned(),
            })
    }

    /// Read every result at once into a [`FromParser`] type, usually one with
    /// `#[derive(FromParser)]`.
    pub fn extract<T: FromParser>(&self) -> Result<T, Error> {
        T::from_parser(self)
    }

    /// Restore every argument, here and in every subcommand, to its
    /// unparsed state, so that the parser can parse again.
    pub fn reset_args(&mut self) {
        self.parsed = false;
        self.table.reset();
        self.subcommands
            .iter_mut()
            .for_each(|subcommand| subcommand.parser.reset_args());
    }

    #[inline]
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// The configured program name, or else `argv[0]` from the last parse,
    /// or else `no_name`
    #[must_use]
    pub fn program_name(&self) -> &str {
        self.info
            .program_name
            .as_deref()
            .or(self.argv0.as_deref())
            .unwrap_or("no_name")
    }

    /// The nested parser for the subcommand called `name`
    #[must_use]
    pub fn subcommand(&self, name: &str) -> Option<&Parser> {
        self.subcommands
            .iter()
            .find(|subcommand| subcommand.name == name)
            .map(|subcommand| &subcommand.parser)
    }

    pub fn subcommand_mut(&mut self, name: &str) -> Option<&mut Parser> {
        self.subcommands
            .iter_mut()
            .find(|subcommand| subcommand.name == name)
            .map(|subcommand| &mut subcommand.parser)
    }

    /// The help message, as something [`Display`][fmt::Display]. ANSI
    /// styling is applied when stdout is a terminal, unless `no_color`.
    #[must_use]
    pub fn help(&self, no_color: bool) -> Help<'_> {
        Help::new(self, no_color)
    }

    #[must_use]
    pub fn format_help(&self, no_color: bool) -> String {
        self.help(no_color).to_string()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("program_name", &self.program_name())
            .field(
                "arguments",
                &self
                    .table
                    .descriptors()
                    .map(|descriptor| (&descriptor.name, &descriptor.value))
                    .collect::<Vec<_>>(),
            )
            .field(
                "subcommands",
                &self
                    .subcommands
                    .iter()
                    .map(|subcommand| &subcommand.name)
                    .collect::<Vec<_>>(),
            )
            .field("parsed", &self.parsed)
            .finish()
    }
}
