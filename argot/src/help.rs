/*!
Help rendering. [`Help`] is a [`Display`] view of a [`Parser`]'s help
message; [`Parser::help`] and [`Parser::format_help`] are the usual entry
points.

Overall structure:

```text
DESCRIPTION

Usage:
  program -r TYPE [options...] positional [optional] {cmd1,cmd2}

Subcommands:
  cmd1                                          description

Positional Argument:
  positional                                    description

Options:
  -s, --name TYPE                               description
      --other TYPE                              description
                                                continued
```
*/

use core::fmt::{self, Display, Write};
use std::io::{self, IsTerminal as _};

use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;
use textwrap::core::display_width;

use crate::{
    parser::Parser,
    table::{Descriptor, HelpKey, Kind},
};

/// The column where descriptions start
pub const DESCRIPTION_COLUMN: usize = 48;

/// The indentation of items inside a section
const ITEM_INDENT: &str = "  ";

/// Where descriptions start, relative to an item inside a section
const DESCRIPTION_OFFSET: usize = DESCRIPTION_COLUMN - ITEM_INDENT.len();

const BOLD: &str = "\x1B[1m";
const UNDERLINE: &str = "\x1B[4m";
const RESET: &str = "\x1B[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Style {
    ansi: bool,
}

impl Style {
    fn bold(self, text: impl Display) -> impl Display {
        lazy_format!(match (self.ansi) {
            true => "{BOLD}{text}{RESET}",
            false => "{text}",
        })
    }

    fn header(self, text: impl Display) -> impl Display {
        lazy_format!(match (self.ansi) {
            true => "{BOLD}{UNDERLINE}{text}{RESET}",
            false => "{text}",
        })
    }
}

/// A displayable help message for a [`Parser`]
#[derive(Clone, Copy)]
pub struct Help<'a> {
    parser: &'a Parser,
    style: Style,
}

impl<'a> Help<'a> {
    /// Help for `parser`. ANSI styling is used only when standard output is a
    /// terminal and `no_color` is false.
    pub(crate) fn new(parser: &'a Parser, no_color: bool) -> Self {
        Self {
            parser,
            style: Style {
                ansi: !no_color && io::stdout().is_terminal(),
            },
        }
    }
}

/// Write `text`, making sure it ends with a newline
fn write_block(out: &mut (impl Write + ?Sized), text: &str) -> fmt::Result {
    out.write_str(text)?;

    match text.ends_with('\n') {
        true => Ok(()),
        false => out.write_char('\n'),
    }
}

/// Write a section by writing a newline, then the `header`, then an
/// indented `body`. An `override_text` replaces the body verbatim.
fn section<O: Write + ?Sized>(
    out: &mut O,
    style: Style,
    header: &str,
    override_text: Option<&str>,
    body: impl FnOnce(&mut IndentWriter<'_, &mut O>) -> fmt::Result,
) -> fmt::Result {
    writeln!(out, "\n{}", style.header(lazy_format!("{header}:")))?;

    match override_text {
        Some(text) => write_block(out, text),
        None => body(&mut IndentWriter::new(ITEM_INDENT, out)),
    }
}

/// Write an optional section, only if the iterator is not empty or there's
/// an override. Otherwise identical to `section`.
fn maybe_section<O: Write + ?Sized, I: IntoIterator>(
    out: &mut O,
    style: Style,
    header: &str,
    override_text: Option<&str>,
    items: I,
    body: impl Fn(&mut IndentWriter<'_, &mut O>, I::Item) -> fmt::Result,
) -> fmt::Result {
    let mut items = items.into_iter().peekable();

    if override_text.is_none() && items.peek().is_none() {
        return Ok(());
    }

    section(out, style, header, override_text, |out| {
        items.try_for_each(|item| body(out, item))
    })
}

/// Describe an item by printing the item, followed by its description. The
/// first line of the description starts at [`DESCRIPTION_COLUMN`], on the
/// same line when the item is narrow enough and on the next line otherwise.
/// Later lines are indented to the same column.
fn describe(out: &mut (impl Write + ?Sized), item: impl Display, description: &str) -> fmt::Result {
    let item = item.to_string();
    let mut lines = description.lines();

    let Some(first) = lines.next() else {
        return writeln!(out, "{item}");
    };

    let width = display_width(&item);

    match DESCRIPTION_OFFSET.checked_sub(width) {
        Some(space) if space >= 1 => writeln!(out, "{item}{:space$}{first}", "")?,
        _ => writeln!(out, "{item}\n{:DESCRIPTION_OFFSET$}{first}", "")?,
    }

    let indent = " ".repeat(DESCRIPTION_OFFSET);
    let mut out = IndentWriter::new(&indent, out);
    lines.try_for_each(|line| writeln!(out, "{line}"))
}

fn describe_option(
    out: &mut (impl Write + ?Sized),
    style: Style,
    descriptor: &Descriptor,
) -> fmt::Result {
    let name = &descriptor.name;

    let tags = lazy_format!(match (descriptor.short) {
        Some(short) => "-{short}, --{name}",
        None => "    --{name}",
    });

    let tags = style.bold(tags);

    let item = match descriptor.kind {
        Kind::Flag => tags.to_string(),
        Kind::Option | Kind::Positional => {
            format!("{tags} {}", descriptor.shape.annotation(descriptor.nargs))
        }
    };

    describe(out, item, &descriptor.description)
}

fn describe_help_key(out: &mut (impl Write + ?Sized), style: Style, help: &HelpKey) -> fmt::Result {
    let name = &help.name;

    let tags = lazy_format!(match (help.short) {
        Some(short) => "-{short}, --{name}",
        None => "    --{name}",
    });

    describe(out, style.bold(tags), &help.description)
}

fn write_usage(out: &mut (impl Write + ?Sized), parser: &Parser) -> fmt::Result {
    let table = &parser.table;

    write!(out, "{}", parser.program_name())?;

    table
        .options
        .iter()
        .filter(|descriptor| descriptor.required)
        .try_for_each(|descriptor| {
            let name = &descriptor.name;
            let tag = lazy_format!(match (descriptor.short) {
                Some(short) => "-{short}",
                None => "--{name}",
            });

            write!(out, " {tag} {}", descriptor.shape.annotation(descriptor.nargs))
        })?;

    write!(out, " [options...]")?;

    table.positionals.iter().try_for_each(|descriptor| {
        let name = &descriptor.name;

        match descriptor.required {
            true => write!(out, " {name}"),
            false => write!(out, " [{name}]"),
        }
    })?;

    if !parser.subcommands.is_empty() {
        let names = parser
            .subcommands
            .iter()
            .map(|subcommand| subcommand.name.as_str())
            .join_with(",");

        write!(out, " {{{names}}}")?;
    }

    writeln!(out)
}

impl Display for Help<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parser = self.parser;
        let info = &parser.info;
        let style = self.style;

        if let Some(ref help) = info.help {
            return write_block(f, help);
        }

        if let Some(ref description) = info.description {
            writeln!(f, "{description}")?;
        }

        section(f, style, "Usage", None, |out| match info.usage {
            Some(ref usage) => write_block(out, usage),
            None => write_usage(out, parser),
        })?;

        maybe_section(
            f,
            style,
            "Subcommands",
            info.subcommand_help.as_deref(),
            &parser.subcommands,
            |out, subcommand| {
                describe(out, style.bold(&subcommand.name), &subcommand.description)
            },
        )?;

        maybe_section(
            f,
            style,
            "Positional Argument",
            info.positional_help.as_deref(),
            &parser.table.positionals,
            |out, descriptor| describe(out, style.bold(&descriptor.name), &descriptor.description),
        )?;

        let help_key = parser.table.help.as_ref();

        maybe_section(
            f,
            style,
            "Options",
            info.options_help.as_deref(),
            parser
                .table
                .options
                .iter()
                .map(Some)
                .chain(help_key.map(|_| None)),
            |out, descriptor| match descriptor {
                Some(descriptor) => describe_option(out, style, descriptor),
                None => match help_key {
                    Some(help) => describe_help_key(out, style, help),
                    None => Ok(()),
                },
            },
        )
    }
}
