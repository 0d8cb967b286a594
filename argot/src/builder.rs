/*!
[`ParserBuilder`], which collects argument declarations and checks them for
consistency before producing a [`Parser`].
 */

use std::collections::HashSet;

use crate::{
    declare::{self, Arg, Flag, Positional},
    errors::ConfigError,
    nargs::NArgs,
    parser::{Parser, ParserInfo, Subcommand},
    table::{Descriptor, HelpKey, Table},
    value::ArgType,
};

/**
Builder for a [`Parser`]. Declarations are checked as they're added, but the
first problem is only reported by [`build`][ParserBuilder::build].

```
use argot::{Arg, Flag, Parser, Positional};

let mut parser = Parser::builder()
    .program_name("greet")
    .arg(Arg::<String>::new("name").short('n').required())
    .flag(Flag::new("loud").short('l'))
    .positional(Positional::<u32>::new("times"))
    .help()
    .build()
    .unwrap();

parser.parse(["greet", "-ln", "world", "3"]).unwrap();

assert_eq!(parser.get::<String>("name").unwrap(), "world");
assert_eq!(parser.get::<bool>("loud").unwrap(), true);
assert_eq!(parser.get::<u32>("times").unwrap(), 3);
```
*/
#[must_use]
pub struct ParserBuilder {
    info: ParserInfo,
    options: Vec<Descriptor>,
    positionals: Vec<Descriptor>,
    help: Option<HelpKey>,
    subcommands: Vec<Subcommand>,
    error: Option<ConfigError>,
}

impl ParserBuilder {
    pub(crate) fn new() -> Self {
        Self {
            info: ParserInfo::default(),
            options: Vec::new(),
            positionals: Vec::new(),
            help: None,
            subcommands: Vec::new(),
            error: None,
        }
    }

    /// Keep `descriptor`, or remember the first declaration error.
    fn accept(&mut self, descriptor: Result<Descriptor, ConfigError>) -> Option<Descriptor> {
        descriptor
            .map_err(|error| {
                self.error.get_or_insert(error);
            })
            .ok()
    }

    /// The program name shown in help. Defaults to `argv[0]`.
    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.info.program_name = Some(name.into());
        self
    }

    /// A description, shown at the top of the help message
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    pub fn arg<T: ArgType>(mut self, arg: Arg<T>) -> Self {
        let descriptor = self.accept(arg.into_descriptor());
        self.options.extend(descriptor);
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        let descriptor = self.accept(flag.into_descriptor());
        self.options.extend(descriptor);
        self
    }

    pub fn positional<T: ArgType>(mut self, positional: Positional<T>) -> Self {
        let descriptor = self.accept(positional.into_descriptor());
        self.positionals.extend(descriptor);
        self
    }

    /// Add the help key, `--help` / `-h`.
    pub fn help(self) -> Self {
        self.help_with("help", Some('h'))
    }

    /// Add the help key under a different name and short alias.
    pub fn help_with(mut self, name: impl Into<String>, short: Option<char>) -> Self {
        let description = self
            .help
            .take()
            .map(|help| help.description)
            .unwrap_or_else(|| "Print help information".to_owned());

        self.help = Some(HelpKey {
            name: name.into(),
            short,
            description,
        });

        self
    }

    /// Replace the help key's description. Adds the default help key if
    /// there isn't one yet.
    pub fn help_description(mut self, description: impl Into<String>) -> Self {
        if self.help.is_none() {
            self = self.help();
        }

        if let Some(ref mut help) = self.help {
            help.description = description.into();
        }

        self
    }

    /// Replace the entire help message with `text`.
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.info.help = Some(text.into());
        self
    }

    /// Replace the composed usage line with `text`.
    pub fn usage_help(mut self, text: impl Into<String>) -> Self {
        self.info.usage = Some(text.into());
        self
    }

    pub fn subcommand_help(mut self, text: impl Into<String>) -> Self {
        self.info.subcommand_help = Some(text.into());
        self
    }

    pub fn positional_help(mut self, text: impl Into<String>) -> Self {
        self.info.positional_help = Some(text.into());
        self
    }

    pub fn options_help(mut self, text: impl Into<String>) -> Self {
        self.info.options_help = Some(text.into());
        self
    }

    /// Add a subcommand. When `name` appears on the command line, it and
    /// everything after it are parsed by `parser`.
    pub fn subcommand(
        mut self,
        name: impl Into<String>,
        parser: Parser,
        description: impl Into<String>,
    ) -> Self {
        self.subcommands.push(Subcommand {
            name: name.into(),
            description: description.into(),
            parser,
        });

        self
    }

    /// Check the declarations as a whole and produce the [`Parser`].
    pub fn build(self) -> Result<Parser, ConfigError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if let Some(ref help) = self.help {
            if help.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }

            declare::check_short(&help.name, help.short)?;
        }

        let mut names = HashSet::new();
        let all_names = self
            .options
            .iter()
            .chain(&self.positionals)
            .map(|descriptor| descriptor.name.as_str())
            .chain(self.help.as_ref().map(|help| help.name.as_str()));

        for name in all_names {
            if !names.insert(name) {
                return Err(ConfigError::DuplicateName {
                    name: name.to_owned(),
                });
            }
        }

        let mut shorts = HashSet::new();
        let all_shorts = self
            .options
            .iter()
            .filter_map(|descriptor| descriptor.short)
            .chain(self.help.as_ref().and_then(|help| help.short));

        for short in all_shorts {
            if !shorts.insert(short) {
                return Err(ConfigError::DuplicateShort { short });
            }
        }

        let mut unbounded = self
            .positionals
            .iter()
            .filter(|descriptor| descriptor.nargs == NArgs::OneOrMore);

        if let (Some(first), Some(second)) = (unbounded.next(), unbounded.next()) {
            return Err(ConfigError::UnboundedPositionals {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }

        let mut subcommands = HashSet::new();
        for subcommand in &self.subcommands {
            if !subcommands.insert(subcommand.name.as_str()) {
                return Err(ConfigError::DuplicateSubcommand {
                    name: subcommand.name.clone(),
                });
            }
        }

        log::debug!(
            "built parser with {} options, {} positionals, {} subcommands",
            self.options.len(),
            self.positionals.len(),
            self.subcommands.len()
        );

        Ok(Parser::new(
            self.info,
            Table {
                options: self.options,
                positionals: self.positionals,
                help: self.help,
            },
            self.subcommands,
        ))
    }
}
