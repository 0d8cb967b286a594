/*!
A declarative command-line argument parser. Declare named arguments, flags,
positional arguments, and subcommands with a [`ParserBuilder`], parse a
command line, and read back typed results.

```
use argot::{Arg, NArgs, Parser, Positional};

let mut parser = Parser::builder()
    .arg(Arg::<f64>::new("scale").short('s').default(1.0))
    .arg(Arg::<i32>::new("points").nargs(NArgs::OneOrMore))
    .positional(Positional::<String>::new("output").required())
    .build()
    .unwrap();

parser
    .parse(["plot", "--points", "1", "2", "3", "-s", "0.5", "out.svg"])
    .unwrap();

assert_eq!(parser.get::<Vec<i32>>("points").unwrap(), [1, 2, 3]);
assert_eq!(parser.get::<f64>("scale").unwrap(), 0.5);
assert_eq!(parser.get::<String>("output").unwrap(), "out.svg");
```

Each argument has an arity ([`NArgs`]): exactly `n` values, `?` (zero or
one), `*` (zero or more), or `+` (one or more). Values that follow a key but
that its arity doesn't take flow on to the positional arguments, in
declaration order. A bare `--` ends option parsing; everything after it is a
value.

Results can be read one at a time with [`Parser::get`], or all at once into a
struct with [`#[derive(FromParser)]`][FromParser].
*/

mod assign;
mod builder;
mod declare;
mod dispatch;
pub mod errors;
mod from_parser;
pub mod help;
mod nargs;
mod parser;
mod shape;
mod table;
pub mod validation;
mod value;

pub use argot_derive::FromParser;
pub use builder::ParserBuilder;
pub use declare::{Arg, Flag, Positional};
pub use errors::{ConfigError, Error, ErrorKind};
pub use from_parser::FromParser;
pub use nargs::{NArgs, UnknownNArgs};
pub use parser::Parser;
pub use shape::{Element, Shape};
pub use value::{ArgType, FromValue, IntoValue, Scalar, Value, ValueKind};
