use argot::{Arg, Flag, NArgs, Parser};

use crate::parse;

#[test]
fn equal_assign() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("arg1"))
        .arg(Arg::<String>::new("arg2"))
        .build()
        .unwrap();

    parse(&mut parser, "--arg1=42 --arg2=Hello,World").unwrap();

    assert_eq!(parser.get::<i32>("arg1").unwrap(), 42);
    assert_eq!(parser.get::<String>("arg2").unwrap(), "Hello,World");
}

#[test]
fn only_the_first_equals_splits() {
    let mut parser = Parser::builder()
        .arg(Arg::<String>::new("expr"))
        .build()
        .unwrap();

    parse(&mut parser, "--expr=a=b").unwrap();
    assert_eq!(parser.get::<String>("expr").unwrap(), "a=b");
}

#[test]
fn flags_and_bools() {
    let mut parser = Parser::builder()
        .flag(Flag::new("arg1"))
        .arg(Arg::<bool>::new("arg2"))
        .arg(Arg::<bool>::new("arg3"))
        .arg(Arg::<bool>::new("arg4"))
        .arg(Arg::<bool>::new("arg5"))
        .arg(Arg::<bool>::new("arg6"))
        .build()
        .unwrap();

    parse(
        &mut parser,
        "--arg1 --arg2=true --arg3=1 --arg4 true --arg5 false --arg6 1",
    )
    .unwrap();

    assert!(parser.get::<bool>("arg1").unwrap());
    assert!(parser.get::<bool>("arg2").unwrap());
    assert!(parser.get::<bool>("arg3").unwrap());
    assert!(parser.get::<bool>("arg4").unwrap());
    assert!(!parser.get::<bool>("arg5").unwrap());
    assert!(parser.get::<bool>("arg6").unwrap());
}

#[test]
fn short_arguments() {
    let mut parser = Parser::builder()
        .arg(Arg::<String>::new("arg1").short('a'))
        .arg(Arg::<i32>::new("arg2").short('b'))
        .arg(Arg::<f32>::new("arg3").short('c'))
        .build()
        .unwrap();

    parse(&mut parser, "-a Hello,World --arg2 42 -c 3.1415").unwrap();

    assert_eq!(parser.get::<String>("arg1").unwrap(), "Hello,World");
    assert_eq!(parser.get::<i32>("arg2").unwrap(), 42);
    assert!((parser.get::<f32>("arg3").unwrap() - 3.1415).abs() < 1e-6);
}

#[test]
fn combining_flags() {
    let mut parser = Parser::builder()
        .flag(Flag::new("arg1").short('a'))
        .flag(Flag::new("arg2").short('b'))
        .flag(Flag::new("arg3").short('c'))
        .flag(Flag::new("arg4").short('d'))
        .flag(Flag::new("arg5").short('e'))
        .build()
        .unwrap();

    parse(&mut parser, "-abd -e").unwrap();

    assert!(parser.get::<bool>("arg1").unwrap());
    assert!(parser.get::<bool>("arg2").unwrap());
    assert!(!parser.get::<bool>("arg3").unwrap());
    assert!(parser.get::<bool>("arg4").unwrap());
    assert!(parser.get::<bool>("arg5").unwrap());
}

#[test]
fn combining_flags_with_an_option() {
    let mut parser = Parser::builder()
        .flag(Flag::new("arg1").short('a'))
        .flag(Flag::new("arg2").short('b'))
        .arg(Arg::<String>::new("arg3").short('c'))
        .flag(Flag::new("arg4").short('d'))
        .build()
        .unwrap();

    parse(&mut parser, "-abdc Hello,World").unwrap();

    assert!(parser.get::<bool>("arg1").unwrap());
    assert!(parser.get::<bool>("arg2").unwrap());
    assert_eq!(parser.get::<String>("arg3").unwrap(), "Hello,World");
    assert!(parser.get::<bool>("arg4").unwrap());
}

#[test]
fn attached_short_value() {
    let mut parser = Parser::builder()
        .flag(Flag::new("verbose").short('v'))
        .arg(Arg::<f64>::new("scale").short('s'))
        .build()
        .unwrap();

    parse(&mut parser, "-vs0.25").unwrap();

    assert!(parser.get::<bool>("verbose").unwrap());
    assert_eq!(parser.get::<f64>("scale").unwrap(), 0.25);
}

#[test]
fn all_types() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("arg1"))
        .arg(Arg::<i32>::new("arg2"))
        .arg(Arg::<f32>::new("arg3"))
        .arg(Arg::<f64>::new("arg4"))
        .arg(Arg::<String>::new("arg5"))
        .arg(Arg::<u8>::new("arg6"))
        .build()
        .unwrap();

    parse(
        &mut parser,
        "--arg1 42 --arg2 -42 --arg3 42.1234567890 \
         --arg4 42.12345678901234567890 --arg5 Hello,World! --arg6 255",
    )
    .unwrap();

    assert_eq!(parser.get::<i32>("arg1").unwrap(), 42);
    assert_eq!(parser.get::<i32>("arg2").unwrap(), -42);
    assert_eq!(parser.get::<f32>("arg3").unwrap(), 42.123_456_789_0_f32);
    assert_eq!(parser.get::<f64>("arg4").unwrap(), 42.123_456_789_012_345_678_90);
    assert_eq!(parser.get::<String>("arg5").unwrap(), "Hello,World!");
    assert_eq!(parser.get::<u8>("arg6").unwrap(), 255);
}

#[test]
fn explicit_default() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("arg1"))
        .arg(Arg::<f64>::new("arg2").default(12.34))
        .arg(Arg::<String>::new("arg3"))
        .build()
        .unwrap();

    parse(&mut parser, "--arg1 42 --arg3 Hello,World").unwrap();

    assert_eq!(parser.get::<i32>("arg1").unwrap(), 42);
    assert_eq!(parser.get::<f64>("arg2").unwrap(), 12.34);
    assert!(!parser.is_assigned("arg2").unwrap());
    assert_eq!(parser.get::<String>("arg3").unwrap(), "Hello,World");
}

#[test]
fn nargs() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("arg1").nargs(NArgs::Exact(3)))
        .arg(Arg::<String>::new("arg2").implicit_default("Bar"))
        .arg(Arg::<f32>::new("arg3").nargs(NArgs::ZeroOrMore))
        .arg(Arg::<f32>::new("arg4").nargs(NArgs::OneOrMore))
        .build()
        .unwrap();

    parse(
        &mut parser,
        "--arg1 1 2 3 --arg2 --arg3 6.0 7.2 8.4 9.6 --arg4 11 12 8 9",
    )
    .unwrap();

    assert_eq!(parser.get::<[i32; 3]>("arg1").unwrap(), [1, 2, 3]);
    assert_eq!(parser.get::<String>("arg2").unwrap(), "Bar");
    assert_eq!(
        parser.get::<Vec<f32>>("arg3").unwrap(),
        [6.0, 7.2, 8.4, 9.6]
    );
    assert_eq!(parser.get::<Vec<f32>>("arg4").unwrap(), [11.0, 12.0, 8.0, 9.0]);
}

#[test]
fn star_without_values_uses_implicit_default() {
    let mut parser = Parser::builder()
        .arg(
            Arg::<Vec<i32>>::new("ids")
                .default(vec![1])
                .implicit_default(vec![7, 8]),
        )
        .build()
        .unwrap();

    parse(&mut parser, "--ids").unwrap();
    assert_eq!(parser.get::<Vec<i32>>("ids").unwrap(), [7, 8]);
}

#[test]
fn stl_types() {
    let mut parser = Parser::builder()
        .arg(Arg::<[i32; 3]>::new("array"))
        .arg(Arg::<Vec<i32>>::new("vector").nargs(NArgs::Exact(4)))
        .arg(Arg::<(i32, f64, String)>::new("tuple"))
        .build()
        .unwrap();

    parse(
        &mut parser,
        "--array 42 43 44 --vector 42 43 44 45 --tuple 42 43.24 Hello,World",
    )
    .unwrap();

    assert_eq!(parser.get::<[i32; 3]>("array").unwrap(), [42, 43, 44]);
    assert_eq!(parser.get::<Vec<i32>>("vector").unwrap(), [42, 43, 44, 45]);
    assert_eq!(
        parser.get::<(i32, f64, String)>("tuple").unwrap(),
        (42, 43.24, "Hello,World".to_owned())
    );
}

#[test]
fn is_assigned() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("arg1").nargs(NArgs::Exact(1)))
        .flag(Flag::new("arg2"))
        .arg(Arg::<i32>::new("arg3").nargs(NArgs::Exact(1)))
        .flag(Flag::new("arg4"))
        .build()
        .unwrap();

    parse(&mut parser, "--arg1 42 --arg2 --arg4").unwrap();

    assert!(parser.is_assigned("arg1").unwrap());
    assert!(parser.is_assigned("arg2").unwrap());
    assert!(!parser.is_assigned("arg3").unwrap());
    assert!(parser.is_assigned("arg4").unwrap());
}

#[test]
fn double_dash_ends_options() {
    let mut parser = Parser::builder()
        .flag(Flag::new("force").short('f'))
        .arg(Arg::<Vec<String>>::new("files").nargs(NArgs::OneOrMore))
        .build()
        .unwrap();

    parse(&mut parser, "-f --files -- --not-a-flag -x").unwrap();

    assert!(parser.get::<bool>("force").unwrap());
    assert_eq!(
        parser.get::<Vec<String>>("files").unwrap(),
        ["--not-a-flag", "-x"]
    );
}

#[test]
fn negative_numbers_and_short_digits() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("offset"))
        .flag(Flag::new("one").short('1'))
        .build()
        .unwrap();

    parse(&mut parser, "--offset -5 -1").unwrap();

    assert_eq!(parser.get::<i32>("offset").unwrap(), -5);
    assert!(parser.get::<bool>("one").unwrap());
}

#[test]
fn reset_and_parse_again() {
    let mut parser = Parser::builder()
        .arg(Arg::<i32>::new("count").default(1))
        .flag(Flag::new("dry-run"))
        .build()
        .unwrap();

    parse(&mut parser, "--count 5 --dry-run").unwrap();
    assert_eq!(parser.get::<i32>("count").unwrap(), 5);

    parser.reset_args();
    parse(&mut parser, "").unwrap();

    assert_eq!(parser.get::<i32>("count").unwrap(), 1);
    assert!(!parser.get::<bool>("dry-run").unwrap());
    assert!(!parser.is_assigned("count").unwrap());

    parser.reset_args();
    parse(&mut parser, "--count=9").unwrap();
    assert_eq!(parser.get::<i32>("count").unwrap(), 9);
}

#[test]
fn independent_instances() {
    let build = || {
        Parser::builder()
            .arg(Arg::<i32>::new("count"))
            .build()
            .unwrap()
    };

    let mut first = build();
    let mut second = build();

    parse(&mut first, "--count 1").unwrap();
    parse(&mut second, "--count 2").unwrap();

    assert_eq!(first.get::<i32>("count").unwrap(), 1);
    assert_eq!(second.get::<i32>("count").unwrap(), 2);

    let handle = std::thread::spawn(move || {
        let mut third = build();
        parse(&mut third, "--count 3").unwrap();
        third.get::<i32>("count").unwrap()
    });

    assert_eq!(handle.join().unwrap(), 3);
    assert_eq!(first.get::<i32>("count").unwrap(), 1);
}

#[test]
fn equals_value_opens_a_group() {
    let mut parser = Parser::builder()
        .arg(Arg::<Vec<i32>>::new("pt").nargs(NArgs::OneOrMore))
        .arg(Arg::<[f64; 3]>::new("xyz"))
        .build()
        .unwrap();

    parse(&mut parser, "--pt=1 2 3 --xyz=0.5 1.5 2.5").unwrap();

    assert_eq!(parser.get::<Vec<i32>>("pt").unwrap(), [1, 2, 3]);
    assert_eq!(parser.get::<[f64; 3]>("xyz").unwrap(), [0.5, 1.5, 2.5]);
}
