mod generate;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate as gen_completions, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mocktable")]
#[command(version)]
#[command(
    about = "Generate synthetic tabular datasets with custom fields, null injection and CSV export",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a dataset and export it as CSV
    Generate {
        /// Dataset domain: alunos (student records) or saude (patient records)
        #[arg(short, long)]
        domain: String,

        /// Number of rows to generate
        #[arg(short, long, default_value = "10")]
        rows: usize,

        /// Percentage of cells to overwrite with nulls (0-50)
        #[arg(short, long, default_value = "0")]
        nulls: u32,

        /// Extra field declaration: NAME=numeric:MIN..MAX or NAME=values:A,B,C (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// YAML file with extra field definitions
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV file (default: dados_<domain>.csv)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write CSV to stdout instead of a file
        #[arg(long)]
        stdout: bool,

        /// Use the legacy CSV format: comma separator, no byte order mark
        #[arg(long)]
        legacy_csv: bool,

        /// Preview without writing files (dry run)
        #[arg(long)]
        dry_run: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            domain,
            rows,
            nulls,
            fields,
            config,
            seed,
            output,
            stdout,
            legacy_csv,
            dry_run,
            verbose,
        } => generate::run(
            domain, rows, nulls, fields, config, seed, output, stdout, legacy_csv, dry_run,
            verbose,
        ),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            gen_completions(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
