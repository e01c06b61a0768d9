use clap::{Parser, Subcommand};
use performance_lab::{
    amortized_report, dedup_preserve_order, most_frequent, pairs_summing_to, running_total,
    simulate_appends, Doubling, FixedIncrement, LabError,
};
use std::process;

/// Contains information parsed from the command-line invocation of performance-lab.
#[derive(Parser, Debug)]
#[command(about = "Algorithm analysis exercises: test, analyze, optimize")]
struct CmdOptions {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the most frequent value
    Frequent {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Remove duplicates, keeping first occurrences
    Dedup {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Print all pairs of distinct values summing to the target
    Pairs {
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Trace n appends to a growable sequence starting at capacity 1
    Resize {
        n: usize,
        /// Compare doubling against growth by a fixed increment
        #[arg(short, long)]
        increment: Option<usize>,
    },
    /// Print the running totals
    Totals {
        #[arg(allow_hyphen_values = true)]
        values: Vec<i64>,
    },
    /// Run every exercise on its worked example
    All,
}

fn format_values(values: &[i64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn run_frequent(values: &[i64]) {
    match most_frequent(values) {
        Some(value) => println!("{}", value),
        None => println!("none"),
    }
}

fn run_dedup(values: &[i64]) {
    println!("{}", format_values(&dedup_preserve_order(values)));
}

fn run_pairs(values: &[i64], target: i64) -> Result<(), LabError> {
    let pairs = pairs_summing_to(values, target)?;
    let parts: Vec<String> = pairs
        .iter()
        .map(|(a, b)| format!("({}, {})", a, b))
        .collect();
    println!("[{}]", parts.join(", "));
    Ok(())
}

fn run_resize(n: usize, increment: Option<usize>) {
    match increment {
        None => {
            for step in simulate_appends(n) {
                println!("{}", step);
            }
        }
        Some(k) => {
            println!("doubling:      {}", amortized_report(n, Doubling));
            println!("increment {:<3} {}", k, amortized_report(n, FixedIncrement(k)));
        }
    }
}

fn run_totals(values: &[i64]) -> Result<(), LabError> {
    println!("{}", format_values(&running_total(values)?));
    Ok(())
}

fn run_all() -> Result<(), LabError> {
    println!("most frequent of [1, 3, 2, 3, 4, 1, 3]:");
    run_frequent(&[1, 3, 2, 3, 4, 1, 3]);
    println!("dedup of [4, 5, 4, 6, 5, 7]:");
    run_dedup(&[4, 5, 4, 6, 5, 7]);
    println!("pairs of [1, 2, 3, 4] summing to 5:");
    run_pairs(&[1, 2, 3, 4], 5)?;
    println!("6 appends:");
    run_resize(6, None);
    println!("running totals of [1, 2, 3, 4]:");
    run_totals(&[1, 2, 3, 4])
}

fn main() {
    // Initialize the logging library. You can print log messages using the `log` macros:
    // https://docs.rs/log/0.4.8/log/ You are welcome to continue using print! statements; this
    // just looks a little prettier.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    // Parse the command line arguments passed to this program
    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    let result = match options.command {
        Command::Frequent { values } => {
            run_frequent(&values);
            Ok(())
        }
        Command::Dedup { values } => {
            run_dedup(&values);
            Ok(())
        }
        Command::Pairs { target, values } => run_pairs(&values, target),
        Command::Resize { n, increment } => {
            run_resize(n, increment);
            Ok(())
        }
        Command::Totals { values } => run_totals(&values),
        Command::All => run_all(),
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}
