use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use arcscan::batch::output::write_records;
use arcscan::batch::runner::{discover_puzzles, run_batch};
use arcscan::core::error::ScanError;

#[derive(Parser)]
#[command(name = "arcscan")]
#[command(version)]
#[command(about = "Largest-object extraction over ARC puzzle grids")]
struct Cli {
    /// Directory of ARC puzzle .json files
    #[arg(default_value = "data/training")]
    data_dir: PathBuf,

    /// Output file, one compact JSON record per line
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Number of files to process (skips the interactive prompt)
    #[arg(short = 'n', long)]
    count: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let files = discover_puzzles(&cli.data_dir)?;

    let count = match cli.count {
        Some(0) => return Err(ScanError::InvalidCount(0).into()),
        Some(n) => n.min(files.len()),
        None => prompt_file_count(&mut io::stdin().lock(), files.len())?,
    };

    println!("\n--- Processing the first {} of {} puzzle files ---", count, files.len());
    let report = run_batch(&files[..count]);
    report.print_summary();

    write_records(&cli.output, &report.records)
        .with_context(|| format!("writing '{}'", cli.output.display()))?;
    println!("\n--- All results have been saved to '{}' ---", cli.output.display());
    Ok(())
}

/// Ask how many of the discovered files to process. Re-prompts until the
/// answer is an integer in `1..=total`.
fn prompt_file_count(input: &mut impl BufRead, total: usize) -> anyhow::Result<usize> {
    let mut line = String::new();
    loop {
        print!("Found {} puzzle files. How many do you want to iterate through? ", total);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(ScanError::PromptClosed.into());
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=total).contains(&n) => return Ok(n),
            Ok(_) => println!("Please enter a number between 1 and {}.", total),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}
