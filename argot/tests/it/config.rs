use argot::{Arg, ConfigError, Flag, NArgs, Parser, Positional};

fn error(builder: argot::ParserBuilder) -> ConfigError {
    builder.build().unwrap_err()
}

#[test]
fn names() {
    assert_eq!(
        error(Parser::builder().arg(Arg::<i32>::new(""))),
        ConfigError::EmptyName
    );

    assert_eq!(
        error(Parser::builder().flag(Flag::new("--verbose"))),
        ConfigError::InvalidName {
            name: "--verbose".into()
        }
    );

    assert_eq!(
        error(Parser::builder().arg(Arg::<i32>::new("a=b"))),
        ConfigError::InvalidName { name: "a=b".into() }
    );

    assert_eq!(
        error(
            Parser::builder()
                .flag(Flag::new("help"))
                .help()
        ),
        ConfigError::DuplicateName {
            name: "help".into()
        }
    );
}

#[test]
fn shorts() {
    assert_eq!(
        error(
            Parser::builder()
                .arg(Arg::<i32>::new("a").short('x'))
                .flag(Flag::new("b").short('x'))
        ),
        ConfigError::DuplicateShort { short: 'x' }
    );

    assert_eq!(
        error(Parser::builder().flag(Flag::new("dash").short('-'))),
        ConfigError::InvalidShort {
            name: "dash".into(),
            short: '-'
        }
    );

    assert_eq!(
        error(Parser::builder().flag(Flag::new("space").short(' '))),
        ConfigError::InvalidShort {
            name: "space".into(),
            short: ' '
        }
    );
}

#[test]
fn arities() {
    assert_eq!(
        error(Parser::builder().arg(Arg::<i32>::new("none").nargs(NArgs::Exact(0)))),
        ConfigError::ZeroNargs {
            name: "none".into()
        }
    );

    assert!(matches!(
        error(Parser::builder().arg(Arg::<[i32; 3]>::new("array").nargs(NArgs::OneOrMore))),
        ConfigError::ArrayNargs { len: 3, .. }
    ));

    assert!(matches!(
        error(Parser::builder().arg(Arg::<Vec<i32>>::new("list").nargs(NArgs::Optional))),
        ConfigError::ListNargs { .. }
    ));

    assert!(matches!(
        error(Parser::builder().arg(Arg::<Vec<i32>>::new("list").nargs(NArgs::Exact(1)))),
        ConfigError::ListNargs { .. }
    ));

    assert!(matches!(
        error(Parser::builder().arg(Arg::<(i32, String)>::new("pair").nargs(NArgs::Exact(3)))),
        ConfigError::TupleNargs { len: 2, .. }
    ));

    assert!(matches!(
        error(Parser::builder().arg(Arg::<[i32; 1]>::new("single"))),
        ConfigError::SingleElement { .. }
    ));
}

#[test]
fn positional_arities() {
    assert!(matches!(
        error(Parser::builder().positional(Positional::<i32>::new("maybe").nargs(NArgs::Optional))),
        ConfigError::PositionalNargs { .. }
    ));

    assert!(matches!(
        error(Parser::builder().positional(Positional::<Vec<i32>>::new("any").nargs(NArgs::ZeroOrMore))),
        ConfigError::PositionalNargs { .. }
    ));

    assert_eq!(
        error(
            Parser::builder()
                .positional(Positional::<i32>::new("first").nargs(NArgs::OneOrMore))
                .positional(Positional::<i32>::new("second").nargs(NArgs::OneOrMore))
        ),
        ConfigError::UnboundedPositionals {
            first: "first".into(),
            second: "second".into(),
        }
    );
}

#[test]
fn mismatched_defaults() {
    assert!(matches!(
        error(Parser::builder().arg(Arg::<i32>::new("count").default("many"))),
        ConfigError::DefaultMismatch { .. }
    ));

    assert!(matches!(
        error(Parser::builder().arg(Arg::<[i32; 2]>::new("pair").default(vec![1, 2, 3]))),
        ConfigError::DefaultMismatch { .. }
    ));
}

#[test]
fn duplicate_subcommands() {
    let child = || Parser::builder().build().unwrap();

    assert_eq!(
        error(
            Parser::builder()
                .subcommand("run", child(), "")
                .subcommand("run", child(), "")
        ),
        ConfigError::DuplicateSubcommand { name: "run".into() }
    );
}
