use std::fs;

use arden_ops::{
    interpreter::{evaluator::core::Context, operator::table::OPERATORS},
    run_script,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// arden-ops runs check scripts against the Arden list operator core.
///
/// Each line of a script is an operator expression, optionally followed by
/// `=>` and the value it must produce.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arden-ops to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement of
    /// a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Lets `=>` checks ignore primary times and compare values only.
    #[arg(short, long)]
    ignore_times: bool,

    /// Prints the names of all operators and exits.
    #[arg(short, long)]
    list: bool,

    #[arg(required_unless_present = "list")]
    contents: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    if args.list {
        for name in OPERATORS {
            println!("{name}");
        }
        return;
    }

    let Some(contents) = args.contents else {
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                          eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                          std::process::exit(1);
                                      })
    } else {
        contents
    };

    let context = Context { compare_times: !args.ignore_times };
    match run_script(&script, &context) {
        Ok(Some(value)) if args.pipe_mode => println!("{}", value.with_times()),
        Ok(_) => {},
        Err(e) => {
            tracing::debug!("script failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
