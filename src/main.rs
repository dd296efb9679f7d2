use std::{fs, process};

use clap::Parser;
use wordscript::{execute, parse, tokenize};

/// wordscript runs scripts written in a small English-like language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells wordscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream instead of running the script.
    #[arg(short, long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the syntax tree instead of running the script.
    #[arg(short, long)]
    ast: bool,

    /// After a successful run, print every variable and its final value.
    #[arg(short, long, conflicts_with_all = ["tokens", "ast"])]
    env: bool,

    contents: String,
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            fail(format_args!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              &args.contents))
        })
    } else {
        args.contents
    };

    if args.tokens {
        let tokens = tokenize(&script).unwrap_or_else(|e| fail(e));
        for (token, line) in tokens {
            println!("{line}: {token}");
        }
        return;
    }

    if args.ast {
        let program = parse(&script).unwrap_or_else(|e| fail(e));
        println!("{program:#?}");
        return;
    }

    let environment = execute(&script, std::io::stdout().lock()).unwrap_or_else(|e| fail(e))
                                                                 .into_environment();

    if args.env {
        for (name, value) in environment.sorted() {
            println!("{name} = {value}");
        }
    }
}
