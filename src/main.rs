#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use neet_quiz::show_cmd::ShowFormat;
use neet_quiz::{Capabilities, DEFAULT_OUTPUT_DIR, ExportConfig, bank, export_cmd, show_cmd};

#[derive(Parser, Debug)]
#[command(name = "neet-quiz")]
#[command(about = "Export the built-in NEET chemistry quiz bank to JSON and CSV", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set NEET_QUIZ_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write neet_quiz.json (and neet_quiz.csv when available) into the output directory
    Export {
        /// Directory to write into; created if missing
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: std::path::PathBuf,
        /// Skip the CSV file even if CSV support is compiled in
        #[arg(long)]
        no_csv: bool,
    },

    /// Print the quiz bank to stdout
    Show {
        #[arg(long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("NEET_QUIZ_LOG").unwrap_or_else(|_| {
        if verbose { "neet_quiz=debug".to_string() } else { "neet_quiz=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let capabilities = Capabilities::detect();
    if !capabilities.csv {
        tracing::info!("CSV support not compiled in. CSV output will be skipped.");
    }

    let result = match cli.command {
        Commands::Export { output_dir, no_csv } => {
            let mut config = ExportConfig::new(output_dir, capabilities);
            config.csv_enabled &= !no_csv;
            export_cmd::run(bank::neet_quiz(), config).map(|summary| {
                tracing::debug!(?summary, "export finished");
            })
        }
        Commands::Show { format } => show_cmd::run(&bank::neet_quiz(), format, capabilities),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
