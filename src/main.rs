//! CLI interface for the resource calculator

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;
use vector_resource_calculator::estimator::{
    DEFAULT_DIMENSIONS, DEFAULT_MAX_CONNECTIONS, DEFAULT_OBJECT_COUNT,
};
use vector_resource_calculator::{
    abbreviate, CalculationInput, InputBounds, Report, ReportView,
};

#[derive(Parser)]
#[command(name = "vrcalc")]
#[command(about = "Estimate memory requirements for a vector database", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy)]
enum View {
    /// Dimensions only, one million objects assumed
    Basic,
    /// Dimensions and object count
    Objects,
    /// All inputs, including graph-connection overhead
    Detailed,
}

impl From<View> for ReportView {
    fn from(view: View) -> Self {
        match view {
            View::Basic => ReportView::Basic,
            View::Objects => ReportView::Objects,
            View::Detailed => ReportView::Detailed,
        }
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate memory requirements
    Estimate {
        /// Vector dimensionality
        #[arg(short, long, default_value_t = DEFAULT_DIMENSIONS)]
        dimensions: u64,
        /// Number of stored objects
        #[arg(short, long, default_value_t = DEFAULT_OBJECT_COUNT)]
        objects: u64,
        /// Graph connections per object
        #[arg(short, long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
        max_connections: u64,
        /// Which fields to take into account
        #[arg(long, value_enum, default_value = "detailed")]
        view: View,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Reject out-of-range inputs instead of clamping them
        #[arg(long)]
        strict: bool,
    },
    /// Abbreviate a number (e.g. 1000000 -> "1 Million")
    Abbreviate {
        /// Number to abbreviate
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Estimate {
            dimensions,
            objects,
            max_connections,
            view,
            format,
            strict,
        } => {
            let requested = CalculationInput::new(dimensions, objects, max_connections);
            let input = InputBounds::default().apply(&requested, strict)?;
            let report = Report::build(view.into(), &input);
            tracing::info!(view = %report.view, objects = %report.objects_label, "report ready");

            match format {
                OutputFormat::Text => print!("{}", report),
                OutputFormat::Json => println!("{}", report.to_json()?),
            }
        }
        Commands::Abbreviate { value } => {
            if value < 0.0 {
                tracing::warn!(value, "negative value, sign dropped");
            }
            println!("{}", abbreviate(value));
        }
    }
    Ok(())
}
