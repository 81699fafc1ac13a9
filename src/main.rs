// sortty: Step-Through Sorting Visualizer for the Terminal

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortty::algorithms::AlgorithmKind;
use sortty::bench::{run_benchmark, BenchConfig};
use sortty::input::{load_csv, parse_values, ArrayPattern, InputError};
use sortty::session::constants::{BENCH_SIZE, DEFAULT_ARRAY_SIZE, DEFAULT_TICK_MS};
use sortty::session::Config;
use sortty::ui::App;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sortty", version, about = "Step-through sorting visualizer")]
struct Cli {
    /// Length of the generated array (50 in the TUI, 10000 for --bench)
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Shape of the generated array: random, sorted or reverse
    #[arg(short, long, default_value = "random")]
    pattern: ArrayPattern,

    /// Comma-separated initial array, e.g. 5,3,8,1
    #[arg(long, conflicts_with = "csv")]
    values: Option<String>,

    /// Load the initial array from a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Start this algorithm immediately: bubble, insertion, selection, quick or merge
    #[arg(short, long)]
    algorithm: Option<AlgorithmKind>,

    /// Milliseconds between automatic steps
    #[arg(short, long, default_value_t = DEFAULT_TICK_MS,
          value_parser = clap::value_parser!(u64).range(10..=500))]
    interval: u64,

    /// Seed for generated arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Time full batch sorts instead of starting the TUI
    #[arg(long)]
    bench: bool,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn to_config(&self) -> Result<Config, InputError> {
        let values = match (&self.values, &self.csv) {
            (Some(text), _) => Some(parse_values(text)?),
            (None, Some(path)) => Some(load_csv(path)?),
            (None, None) => None,
        };
        Ok(Config {
            size: self.size.unwrap_or(DEFAULT_ARRAY_SIZE),
            pattern: self.pattern,
            values,
            interval_ms: self.interval,
            seed: self.seed,
            algorithm: self.algorithm,
        })
    }

    fn to_bench_config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            size: self.size.unwrap_or(BENCH_SIZE),
            algorithms: self.algorithm.map_or(defaults.algorithms, |kind| vec![kind]),
            seed: self.seed,
        }
    }
}

/// Install the tracing subscriber. The TUI owns the terminal, so it only logs to a file.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortty=info"));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.bench)?;

    if cli.bench {
        let config = cli.to_bench_config();
        info!(size = config.size, "running benchmark");
        let records = run_benchmark(&config);
        for record in &records {
            println!("{}", record);
        }
        if records.iter().any(|r| !r.verified) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let session = match config.build_session() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let array_size = config.values.as_ref().map_or(config.size, Vec::len);
    let mut app = App::new(session, config.rng(), array_size);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
