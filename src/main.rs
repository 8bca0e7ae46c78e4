use clap::{Parser, Subcommand};
use physlaws::cli::{self, OutputFormat};
use physlaws::error::PhysicsResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "physlaws")]
#[command(about = "Physics laws with dimension-checked calculators")]
#[command(long_about = "physlaws - symbolic physics laws with unit-validated calculations

COMMANDS:
  list       - List every law in the catalog
  show       - Show a law's equation, symbols and solved forms
  calculate  - Solve a law for one symbol from quantities with units
  batch      - Run a YAML calculation sheet
  check      - Verify every law is dimensionally consistent

EXAMPLES:
  physlaws calculate density_from_mass_volume --set mass=\"2 kg\" --set volume=\"1 m^3\"
  physlaws calculate lens_focus_from_object_and_image \\
      --set distance_to_object=\"30 cm\" --set distance_to_image=\"60 cm\" --unit cm
  physlaws batch sheet.yaml --format json

Set RUST_LOG (e.g. RUST_LOG=physlaws=debug) for detailed logs.")]
#[command(version)]
struct Cli {
    /// Show debug logs and intermediate steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every law in the catalog
    List,

    /// Show a law's equation, symbols and solved forms
    Show {
        /// Law name (see `physlaws list`)
        law: String,
    },

    #[command(long_about = "Solve a law for one symbol.

Every other symbol of the law must be given with --set. Quantities are a
number followed by a unit expression; units are checked against each symbol's
dimension before solving.

UNITS:
  kg g mg t lb | m km cm mm um nm in ft | s ms min h | L mL
  A K mol cd | N J W Pa Hz
  Combine with * and /, raise with ^: kg/m^3, g*cm^-3, m/s^2

EXAMPLES:
  physlaws calculate density_from_mass_volume --set mass=\"2 kg\" --set volume=\"1 m^3\"
  physlaws calculate density_from_mass_volume --solve-for volume \\
      --set mass=\"3 kg\" --set density=\"1 g/cm^3\" --unit L")]
    /// Solve a law for one symbol
    Calculate {
        /// Law name (see `physlaws list`)
        law: String,

        /// Known value as NAME=QUANTITY, e.g. mass="2 kg" (repeatable)
        #[arg(short, long = "set", value_name = "NAME=QUANTITY")]
        set: Vec<String>,

        /// Symbol to solve for (defaults to the law's output)
        #[arg(long)]
        solve_for: Option<String>,

        /// Unit for the result (defaults to SI)
        #[arg(short, long)]
        unit: Option<String>,
    },

    #[command(long_about = "Run every calculation in a YAML sheet.

SHEET FORMAT:
  calculations:
    - name: water
      law: density_from_mass_volume
      inputs:
        mass: 1000 kg
        volume: 1 m^3
      unit: g/cm^3

Failing calculations are reported and the command exits with an error.")]
    /// Run a YAML calculation sheet
    Batch {
        /// Path to the YAML sheet
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Verify every law is dimensionally consistent
    Check,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "physlaws=debug"
    } else {
        "physlaws=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> PhysicsResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::List => cli::list(),

        Commands::Show { law } => cli::show(&law),

        Commands::Calculate {
            law,
            set,
            solve_for,
            unit,
        } => cli::calculate(law, set, solve_for, unit, cli.verbose),

        Commands::Batch { file, format } => cli::batch(file, format),

        Commands::Check => cli::check(),
    }
}
