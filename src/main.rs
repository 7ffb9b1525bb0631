use std::fs;

use clap::Parser;
use intexpr::{
    config::{Config, DEFAULT_MAX_DEPTH},
    get_result, parse_with,
};

/// intexpr evaluates integer arithmetic expressions such as `-(2 + 3) * 4 / 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intexpr to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Accept malformed input the way the classic interpreter did: unknown
    /// characters end the input, missing operands read as zero and trailing
    /// tokens are ignored.
    #[arg(short, long)]
    lenient: bool,

    /// Print the parsed tree, fully parenthesized, instead of its value.
    #[arg(short, long)]
    ast: bool,

    /// Deepest nesting of parentheses, signs and operator chains accepted.
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config { max_depth: args.max_depth,
                          ..if args.lenient { Config::lenient() } else { Config::strict() } };

    let output: Result<String, Box<dyn std::error::Error>> = if args.ast {
        parse_with(&source, config).map(|expr| expr.to_string())
                                   .map_err(Into::into)
    } else {
        get_result(&source, config).map(|value| value.to_string())
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
