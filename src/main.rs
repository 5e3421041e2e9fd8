use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::time::Duration;

use murex::{
    benchmark_report, is_match, BenchReport, Clusters, Pattern, Scalars, TextView, Utf16Units,
    Utf8Units,
};

mod cli;
use cli::{Cli, Commands, ViewKind};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Match {
            pattern,
            file,
            view,
            count,
        } => run_match(&pattern, file.as_deref(), view, count),
        Commands::Bench {
            pattern,
            corpus,
            json,
        } => run_bench(&pattern, &corpus, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read the named file, or stdin when no file was given.
fn read_input(file: Option<&str>) -> Result<String, Box<dyn Error>> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run_match(
    pattern: &str,
    file: Option<&str>,
    view: ViewKind,
    count_only: bool,
) -> Result<(), Box<dyn Error>> {
    let input = read_input(file)?;
    match view {
        ViewKind::Utf8 => filter_lines::<Utf8Units>(pattern, &input, count_only),
        ViewKind::Utf16 => filter_lines::<Utf16Units>(pattern, &input, count_only),
        ViewKind::Scalar => filter_lines::<Scalars>(pattern, &input, count_only),
        ViewKind::Cluster => filter_lines::<Clusters>(pattern, &input, count_only),
    }
    Ok(())
}

fn filter_lines<R>(pattern: &str, input: &str, count_only: bool)
where
    R: for<'a> TextView<'a>,
{
    let pattern = Pattern::new(pattern);
    let mut count = 0usize;
    for line in input.lines() {
        if is_match::<R>(&pattern, line) {
            count += 1;
            if !count_only {
                println!("{}", line);
            }
        }
    }
    if count_only {
        println!("{}", count);
    }
}

fn run_bench(pattern: &str, corpus_path: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let corpus = fs::read_to_string(corpus_path)?;

    let reports = vec![
        benchmark_report::<Utf8Units>(pattern, &corpus),
        benchmark_report::<Utf16Units>(pattern, &corpus),
        benchmark_report::<Scalars>(pattern, &corpus),
        benchmark_report::<Clusters>(pattern, &corpus),
    ];

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_table(pattern, &reports);
    Ok(())
}

fn print_table(pattern: &str, reports: &[BenchReport]) {
    // Highlight the fastest view, but only when writing to a terminal.
    let styled = atty::is(atty::Stream::Stdout);
    let fastest = reports
        .iter()
        .map(|r| r.elapsed)
        .min()
        .unwrap_or(Duration::ZERO);

    println!("pattern {}", Pattern::new(pattern));
    println!("{:<10} {:>8} {:>8} {:>14}", "view", "lines", "matches", "elapsed");
    for r in reports {
        let row = format!(
            "{:<10} {:>8} {:>8} {:>14}",
            r.representation,
            r.lines,
            r.matches,
            format!("{:.3?}", r.elapsed)
        );
        if styled && r.elapsed == fastest {
            println!("\x1b[32m{}\x1b[0m", row);
        } else {
            println!("{}", row);
        }
    }
}
