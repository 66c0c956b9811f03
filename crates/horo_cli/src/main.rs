use std::io;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use horo_base::{Aspect, HoroError, HoroscopeConfig, HoroscopeGenerator, Painter, parse_date};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing_subscriber::EnvFilter;

mod session;

use session::Session;

#[derive(Parser)]
#[command(name = "horo", about = "Pseudo-random horoscope generator")]
struct Cli {
    /// Birth date (DD.MM.YYYY); print one horoscope and exit
    #[arg(long)]
    date: Option<String>,
    /// Date the horoscope is for (DD.MM.YYYY, default: today)
    #[arg(long)]
    today: Option<String>,
    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Comma-separated aspects: love, career, health, finance, growth
    #[arg(long, value_delimiter = ',', value_parser = parse_aspect)]
    aspects: Vec<Aspect>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let colors = !cli.no_color;
    if !colors {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose, colors);

    let dates = match cli.dates() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid date: {e}");
            std::process::exit(1);
        }
    };
    let rng = match cli.seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_rng(&mut rand::rng()),
    };
    let generator = HoroscopeGenerator::new(HoroscopeConfig::with_aspects(cli.aspects));
    tracing::info!(
        seed = ?cli.seed,
        aspects = generator.config().aspects.len(),
        "generator ready"
    );

    let mut session = Session::new(generator, rng, Painter::new(colors), dates.today);
    let mut stdout = io::stdout().lock();
    let result = match dates.birth {
        Some(birth) => session.print_report(birth, &mut stdout),
        None => session.run(&mut io::stdin().lock(), &mut stdout).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

/// Dates given on the command line, parsed.
#[derive(Debug, PartialEq)]
struct CliDates {
    /// One-shot birth date from `--date`.
    birth: Option<NaiveDate>,
    /// Report date override from `--today`.
    today: Option<NaiveDate>,
}

impl Cli {
    fn dates(&self) -> Result<CliDates, HoroError> {
        Ok(CliDates {
            birth: self.date.as_deref().map(parse_date).transpose()?,
            today: self.today.as_deref().map(parse_date).transpose()?,
        })
    }
}

fn parse_aspect(s: &str) -> Result<Aspect, String> {
    Aspect::from_name(s)
        .ok_or_else(|| format!("unknown aspect {s:?} (love, career, health, finance, growth)"))
}
