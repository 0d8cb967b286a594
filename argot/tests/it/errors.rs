use argot::{Arg, Error, ErrorKind, Flag, NArgs, Parser, Positional, validation::Range};
use expect_test::expect;

use crate::{check_error, parse};

fn two_args() -> Parser {
    Parser::builder()
        .arg(Arg::<i32>::new("arg1"))
        .arg(Arg::<f32>::new("arg2"))
        .build()
        .unwrap()
}

#[test]
fn results_before_parse() {
    let parser = two_args();

    expect![[r#"Parser did not parse argument, call parse first"#]]
        .assert_eq(&parser.get::<i32>("arg1").unwrap_err().to_string());

    let error = parser.is_assigned("arg1").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn stray_positional() {
    check_error(
        two_args(),
        "foo",
        expect![[r#"Invalid positional argument: ["foo"]"#]],
    );
}

#[test]
fn leftover_after_exact_value() {
    check_error(
        Parser::builder()
            .arg(Arg::<i32>::new("arg1").nargs(NArgs::Exact(1)))
            .build()
            .unwrap(),
        "--arg1 1 2",
        expect![[r#"Invalid positional argument: ["2"]"#]],
    );
}

#[test]
fn extra_positional() {
    check_error(
        Parser::builder()
            .positional(Positional::<i32>::new("only"))
            .build()
            .unwrap(),
        "1 2",
        expect![[r#"Duplicated positional argument: ["2"]"#]],
    );
}

#[test]
fn one_or_more_without_values() {
    check_error(
        Parser::builder()
            .arg(Arg::<i32>::new("arg1").nargs(NArgs::OneOrMore))
            .build()
            .unwrap(),
        "--arg1",
        expect![[r#"Argument arg1: should take more than one value"#]],
    );

    check_error(
        Parser::builder()
            .arg(Arg::<i32>::new("arg1").nargs(NArgs::OneOrMore))
            .arg(Arg::<i32>::new("arg2"))
            .build()
            .unwrap(),
        "--arg1 --arg2",
        expect![[r#"Argument arg1: should take more than one value"#]],
    );
}

#[test]
fn exactly_one_without_value() {
    check_error(
        Parser::builder()
            .arg(Arg::<i32>::new("arg1").nargs(NArgs::Exact(1)))
            .build()
            .unwrap(),
        "--arg1",
        expect![[r#"Argument arg1: should take exactly one value but zero"#]],
    );
}

#[test]
fn too_few_values() {
    check_error(
        Parser::builder()
            .arg(Arg::<[i32; 3]>::new("point"))
            .build()
            .unwrap(),
        "--point 1 2",
        expect![[r#"Argument point: invalid argument ["1", "2"]"#]],
    );
}

#[test]
fn duplicated_argument() {
    check_error(
        two_args(),
        "--arg1 1 --arg1 2",
        expect![[r#"Argument arg1: duplicated argument"#]],
    );
}

#[test]
fn flag_with_value() {
    check_error(
        Parser::builder()
            .flag(Flag::new("quiet").short('q'))
            .build()
            .unwrap(),
        "-q loud",
        expect![[r#"Flag quiet can not take value"#]],
    );
}

#[test]
fn unknown_keys() {
    check_error(two_args(), "--arg3 1", expect![[r#"Invalid argument --arg3"#]]);
    check_error(two_args(), "-x", expect![[r#"Invalid argument -x"#]]);
}

#[test]
fn cast_failure() {
    check_error(
        two_args(),
        "--arg1 forty-two",
        expect![[r#"Argument arg1: forty-two cannot convert NUMBER"#]],
    );

    check_error(
        Parser::builder()
            .arg(Arg::<u8>::new("small"))
            .build()
            .unwrap(),
        "--small 256",
        expect![[r#"Argument small: 256 cannot convert NUMBER"#]],
    );
}

#[test]
fn validation_failure() {
    let range = || Arg::<i32>::new("arg").validator(Range::new(0, 100));

    let mut parser = Parser::builder()
        .arg(range())
        .flag(Flag::new("arg2"))
        .build()
        .unwrap();

    parse(&mut parser, "--arg 42").unwrap();

    let mut parser = Parser::builder()
        .arg(range())
        .flag(Flag::new("arg2"))
        .build()
        .unwrap();

    let error = parse(&mut parser, "--arg 121").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    expect![[r#"Option arg has invalid value 121"#]].assert_eq(&error.to_string());
}

#[test]
fn required_arguments() {
    let build = || {
        Parser::builder()
            .program_name("Sample Program")
            .arg(Arg::<i32>::new("arg1").short('a').nargs(NArgs::Exact(1)))
            .arg(Arg::<i32>::new("arg2").required().nargs(NArgs::Exact(1)))
            .arg(Arg::<i32>::new("arg3").nargs(NArgs::Exact(1)).required())
            .arg(Arg::<i32>::new("arg4").short('b').nargs(NArgs::Exact(1)))
            .build()
            .unwrap()
    };

    check_error(build(), "--arg1 1 --arg2 2", expect![[r#"Required ["arg3"]"#]]);
    check_error(build(), "", expect![[r#"Required ["arg2", "arg3"]"#]]);

    let mut parser = build();
    parse(&mut parser, "--arg2 2 --arg3 3").unwrap();
    assert_eq!(parser.get::<i32>("arg3").unwrap(), 3);
}

#[test]
fn parse_twice() {
    let mut parser = two_args();
    parse(&mut parser, "--arg1 1").unwrap();

    let error = parse(&mut parser, "--arg1 2").unwrap_err();
    assert!(matches!(error, Error::AlreadyParsed));
    assert_eq!(error.to_string(), "Cannot parse twice");
}

#[test]
fn leftovers_from_a_failed_parse() {
    let mut parser = two_args();
    parse(&mut parser, "--arg1 1 --arg2 x").unwrap_err();

    expect![[r#"keys ["arg1"] already assigned"#]]
        .assert_eq(&parse(&mut parser, "--arg1 1").unwrap_err().to_string());

    parser.reset_args();
    parse(&mut parser, "--arg1 1").unwrap();
}

#[test]
fn type_mismatch_and_unknown_names() {
    let mut parser = two_args();
    parse(&mut parser, "--arg1 1").unwrap();

    let error = parser.get::<String>("arg1").unwrap_err();
    assert!(matches!(error, Error::TypeMismatch { .. }));
    assert_eq!(error.kind(), ErrorKind::Parse);

    let error = parser.get::<i32>("nope").unwrap_err();
    expect![[r#"Argument nope is not declared"#]].assert_eq(&error.to_string());
}

#[test]
fn kinds() {
    let mut parser = two_args();
    let error = parse(&mut parser, "--arg1 x").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.help(), None);
}
