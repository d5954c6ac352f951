use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daily_puzzles::cipher::{
    generate_derangement_with_stats, write_keys, Derangement, DEFAULT_KEY_COUNT,
};
use daily_puzzles::content::{
    load_document, parse_date, validate_games, DateRange, PromptValidator, Rules, Severity,
    ValidationReport, DEFAULT_DOCUMENT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Daily puzzle content checks and cryptogram keys", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print cryptogram keys, one per line, with no letter in its own position
    Keys {
        #[arg(short = 'n', long, default_value_t = DEFAULT_KEY_COUNT)]
        count: usize,
        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
        /// Report how many shuffles each key needed on stderr
        #[arg(long)]
        stats: bool,
    },
    /// Encipher (or decipher) text with a key
    Encipher {
        #[arg(short, long)]
        key: Derangement,
        text: String,
        #[arg(short, long)]
        decipher: bool,
    },
    /// Check the daily lingo and scryptogram games up to END_DATE
    ValidateGames {
        #[command(flatten)]
        args: ValidateArgs,
    },
    /// Check the daily video prompts up to END_DATE
    ValidatePrompts {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

#[derive(clap::Args)]
struct ValidateArgs {
    /// Last day to check, YYYY-MM-DD
    #[arg(value_parser = parse_date_arg)]
    end_date: NaiveDate,
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DOCUMENT)]
    file: PathBuf,
    /// First day to check, overriding the rules file
    #[arg(long, value_parser = parse_date_arg)]
    start: Option<NaiveDate>,
    /// TOML file overriding the default content rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
    /// Fail prompt runs on format, link and quote problems, not only missing dates
    #[arg(long)]
    strict: bool,
}

impl ValidateArgs {
    fn load_rules(&self) -> CliResult<Rules> {
        let mut rules = match &self.rules {
            Some(path) => Rules::load(path)?,
            None => Rules::default(),
        };
        if self.strict {
            rules.prompts.strict = true;
        }
        Ok(rules)
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<bool> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keys { count, seed, stats } => {
            match seed {
                Some(seed) => run_keys(count, stats, &mut StdRng::seed_from_u64(seed))?,
                None => run_keys(count, stats, &mut rand::rng())?,
            }
            Ok(true)
        }
        Commands::Encipher {
            key,
            text,
            decipher,
        } => {
            if decipher {
                println!("{}", key.decipher(&text));
            } else {
                println!("{}", key.encipher(&text));
            }
            Ok(true)
        }
        Commands::ValidateGames { args } => run_validate_games(&args),
        Commands::ValidatePrompts { args } => run_validate_prompts(&args),
    }
}

fn run_keys<R: Rng + ?Sized>(count: usize, stats: bool, rng: &mut R) -> CliResult<()> {
    let mut keys = Vec::with_capacity(count);
    let mut rejected_total = 0u64;
    for _ in 0..count {
        let (key, rejected) = generate_derangement_with_stats(rng);
        rejected_total += u64::from(rejected);
        keys.push(key);
    }
    write_keys(&mut io::stdout().lock(), &keys)?;
    if stats {
        eprintln!(
            "{} keys, {} rejected shuffles ({:.2} trials per key)",
            count,
            rejected_total,
            if count == 0 {
                0.0
            } else {
                (rejected_total + count as u64) as f64 / count as f64
            }
        );
    }
    Ok(())
}

fn run_validate_games(args: &ValidateArgs) -> CliResult<bool> {
    let rules = args.load_rules()?;
    let range = DateRange::new(args.start.unwrap_or(rules.games.start_date), args.end_date);
    let document = load_document(&args.file)?;
    let report = validate_games(&document, range, &rules.games);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.quiet);
        if report.is_valid() {
            println!(
                "Validation successful for all games from {} to {}.",
                range.start, range.end
            );
        } else {
            println!("Validation failed. Please fix the issues above.");
        }
    }
    Ok(report.is_valid())
}

fn run_validate_prompts(args: &ValidateArgs) -> CliResult<bool> {
    let rules = args.load_rules()?;
    let range = DateRange::new(
        args.start.unwrap_or(rules.prompts.start_date),
        args.end_date,
    );
    let validator = PromptValidator::new(rules.prompts)?;
    let document = load_document(&args.file)?;
    let report = validator.validate(&document, range);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.quiet);
        if report.is_valid() {
            println!("Success: All required dates are present in the prompts array.");
        } else {
            println!(
                "Validation failed: {} error(s) across {} day(s).",
                report.count(Severity::Error),
                report.checked_days
            );
        }
    }
    Ok(report.is_valid())
}

fn print_report(report: &ValidationReport, quiet: bool) {
    if report.range.is_empty() && !quiet {
        println!(
            "Warning: end date {} is before start date {}; no days checked.",
            report.range.end, report.range.start
        );
    }
    for diagnostic in &report.diagnostics {
        if quiet && diagnostic.severity != Severity::Error {
            continue;
        }
        println!("{diagnostic}");
    }
}
