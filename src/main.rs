use std::fs;

use clap::Parser;
use maxcalc::interpret;

/// maxcalc evaluates a single arithmetic expression built from numbers,
/// the operators `+ - * / ^ #`, and parentheses. `#` takes the maximum of
/// its two operands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells maxcalc to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match interpret(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
