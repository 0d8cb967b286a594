use anyhow::Context as _;
use argot::{Arg, Flag, FromParser, Parser, Positional, validation::Range};

#[derive(FromParser, Debug)]
struct Build {
    jobs: u32,
    release: bool,
}

#[derive(FromParser, Debug)]
struct Arguments {
    verbose: bool,
    level: i32,
    ratio: f64,
    name: String,
    point: [i32; 3],
    input: String,
    output: String,

    #[argot(subcommand)]
    build: Option<Build>,
}

fn build_parser() -> anyhow::Result<Parser> {
    let build = Parser::builder()
        .description("Build everything")
        .arg(
            Arg::<u32>::new("jobs")
                .short('j')
                .default(1u32)
                .validator(Range::new(0, 1024))
                .description("Number of parallel jobs"),
        )
        .flag(Flag::new("release").description("Build with optimizations"))
        .help()
        .build()
        .context("invalid `build` subcommand declaration")?;

    Parser::builder()
        .program_name("argot-demo")
        .description("Some description")
        .subcommand("build", build, "Build the project\nwith the given settings")
        .positional(Positional::<[i32; 3]>::new("point").description("Positional argument help"))
        .positional(
            Positional::<String>::new("input")
                .required()
                .description("Positional argument help\nmultiple help"),
        )
        .positional(
            Positional::<String>::new("output")
                .required()
                .description("help"),
        )
        .flag(Flag::new("verbose").short('v').description("test1"))
        .arg(
            Arg::<i32>::new("level")
                .short('l')
                .implicit_default(1)
                .description("multiple\nlines\ndescription"),
        )
        .arg(Arg::<f64>::new("ratio").default(0.5).description("multiple\nlines\ndescription"))
        .arg(
            Arg::<String>::new("name")
                .short('n')
                .required()
                .description("test4"),
        )
        .help()
        .build()
        .context("invalid parser declaration")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut parser = build_parser()?;
    parser.parse_env()?;

    let arguments: Arguments = parser.extract()?;
    log::debug!("parsed {parser:?}");

    println!("{arguments:#?}");
    Ok(())
}
