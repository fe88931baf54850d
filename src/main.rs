use std::io;

use anyhow::Context;
use chaincalc::frontend::{batch, console, mode::Mode, sink::ConsoleSink};
use clap::Parser;

/// chaincalc evaluates chained arithmetic such as `add 1 2 mul 3`, strictly
/// from left to right.
///
/// Without arguments it starts an interactive prompt; type `exit` to leave.
/// Given an existing input file and an output path it evaluates the input
/// line by line and writes one result per line to the output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// An input file and an output file for batch mode. Any other
    /// combination starts the interactive prompt.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    paths: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&Mode::from_args(&args.paths)) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }

    println!("all calcs have been completed");
}

fn run(mode: &Mode) -> anyhow::Result<()> {
    match mode {
        Mode::Console => {
            println!("calculate console");
            let mut sink = ConsoleSink::new(io::stdout());
            console::run(io::stdin().lock(), &mut io::stdout(), &mut sink)
                .context("interactive session failed")?;
        },
        Mode::Batch { input, output } => {
            println!("calculate file");
            batch::run(input, output, io::stdout()).with_context(|| {
                                                        format!("batch run from {} to {} failed",
                                                                input.display(),
                                                                output.display())
                                                    })?;
        },
    }

    Ok(())
}
