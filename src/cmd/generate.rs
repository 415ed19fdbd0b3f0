//! Generate command CLI handler.

use crate::export::{self, CsvConfig};
use crate::fields::{FieldRegistry, FieldSpec, FieldsFile};
use crate::generator::Generator;
use crate::nulls;
use crate::schema::Domain;
use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    domain: String,
    rows: usize,
    nulls_percent: u32,
    fields: Vec<String>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    stdout: bool,
    legacy_csv: bool,
    dry_run: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let domain = domain
        .parse::<Domain>()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if nulls_percent > 50 {
        anyhow::bail!("--nulls must be between 0 and 50");
    }

    // Config-file declarations first, then command-line ones; a repeated
    // name overwrites the earlier declaration's values
    let mut registry = FieldRegistry::new();
    if let Some(path) = &config {
        let file = FieldsFile::load(path)
            .with_context(|| format!("Failed to load field definitions from {}", path.display()))?;
        for spec in file.fields {
            registry.push(spec);
        }
    }
    for decl in &fields {
        let spec = decl
            .parse::<FieldSpec>()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        registry.push(spec);
    }
    registry.validate()?;

    // Random seed unless one was given, same dataset for the same seed
    let seed = seed.unwrap_or_else(rand::random);

    let mut generator = Generator::new(domain, seed);
    let mut dataset = generator.generate(rows, &registry);

    let mut null_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let attempts = nulls::inject(&mut dataset, nulls_percent, &mut null_rng);

    if verbose || dry_run {
        eprintln!("Domain: {}", domain);
        eprintln!("Seed: {}", seed);
        eprintln!("Rows: {}", dataset.row_count());
        eprintln!("Columns: {}", dataset.columns.join(", "));
        eprintln!("Null overwrite attempts: {}", attempts);
        eprintln!("Null cells: {}", dataset.null_count());
    }

    if dry_run {
        return Ok(());
    }

    let csv_config = if legacy_csv {
        CsvConfig::legacy()
    } else {
        CsvConfig::default()
    };

    if stdout {
        let out = io::stdout();
        export::write_csv(&dataset, &csv_config, out.lock())?;
    } else {
        let path = output.unwrap_or_else(|| PathBuf::from(export::default_filename(domain)));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        export::write_csv(&dataset, &csv_config, BufWriter::new(file))?;
        if verbose {
            eprintln!("Wrote {}", path.display());
        }
    }

    Ok(())
}
