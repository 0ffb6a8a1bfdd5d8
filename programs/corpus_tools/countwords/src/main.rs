use clap::Parser;
use countwords::{run_paths, CountError, Options};
use log::LevelFilter;
use std::path::PathBuf;
use term_macros::fatal;

const AFTER_HELP: &str = "Reads from file IN or, if - is given, from standard input.
Default is to write to standard output, or to file OUT if given.";

#[derive(Debug, Parser)]
#[command(name = "countwords", version)]
#[command(about = "count and sort words by their number of occurences.")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// reverse sort order
    #[arg(long)]
    reverse: bool,
    /// output to json format
    #[arg(long)]
    json: bool,
    /// log counting progress to stderr
    #[arg(short, long)]
    verbose: bool,
    /// input file, or - for standard input
    #[arg(value_name = "IN")]
    input: Option<String>,
    /// output file, standard output if omitted
    #[arg(value_name = "OUT")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    };
    term_macros::init_logger("countwords", level);

    let Some(input) = cli.input.as_deref() else {
        fatal!("{}", CountError::MissingArgument)
    };
    let options = Options {
        reverse: cli.reverse,
        json: cli.json,
    };
    if let Err(err) = run_paths(&options, input, cli.output.as_deref()) {
        fatal!("{err}");
    }
}
