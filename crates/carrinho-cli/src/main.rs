mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "carrinho",
    version,
    about = "Extract cart line items from a saved shop checkout page into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract cart items from an HTML snapshot and write a CSV spreadsheet
    Extract {
        /// Path to the saved cart page (HTML)
        input_file: PathBuf,

        /// Destination spreadsheet (CSV)
        #[arg(
            short = 'O',
            long = "out",
            value_name = "FILE",
            default_value = "carrinho_out.csv"
        )]
        out: PathBuf,

        /// Custom JSON taxonomy file
        #[arg(short, long, value_name = "FILE")]
        taxonomy: Option<PathBuf>,

        /// Predefined taxonomy: mtg-ptbr (the default)
        #[arg(short, long, value_name = "NAME", conflicts_with = "taxonomy")]
        preset: Option<String>,

        /// Custom JSON selector set
        #[arg(short, long, value_name = "FILE")]
        selectors: Option<PathBuf>,
    },
    /// Parse a cart snapshot and print the items without writing a file
    Preview {
        /// Path to the saved cart page (HTML)
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Custom JSON taxonomy file
        #[arg(short, long, value_name = "FILE")]
        taxonomy: Option<PathBuf>,

        /// Predefined taxonomy: mtg-ptbr (the default)
        #[arg(short, long, value_name = "NAME", conflicts_with = "taxonomy")]
        preset: Option<String>,

        /// Custom JSON selector set
        #[arg(short, long, value_name = "FILE")]
        selectors: Option<PathBuf>,
    },
    /// Manage and inspect keyword taxonomies
    Taxonomy {
        #[command(subcommand)]
        action: TaxonomyAction,
    },
}

#[derive(Subcommand)]
enum TaxonomyAction {
    /// List predefined taxonomies
    List,
    /// Explain a taxonomy in plain language
    Explain {
        /// Preset name (e.g., "mtg-ptbr")
        preset: String,
    },
    /// Validate a custom taxonomy file
    Validate {
        /// Path to JSON taxonomy file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out,
            taxonomy,
            preset,
            selectors,
        } => commands::extract::run(input_file, out, taxonomy, preset, selectors),
        Commands::Preview {
            input_file,
            output,
            taxonomy,
            preset,
            selectors,
        } => commands::preview::run(input_file, &output, taxonomy, preset, selectors),
        Commands::Taxonomy { action } => match action {
            TaxonomyAction::List => commands::taxonomy::list(),
            TaxonomyAction::Explain { preset } => commands::taxonomy::explain(&preset),
            TaxonomyAction::Validate { file } => commands::taxonomy::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
