//! CSV export for assembled datasets.

use crate::dataset::Dataset;
use crate::normalize::normalize;
use crate::schema::Domain;
use anyhow::Context;
use std::io::Write;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// CSV output configuration
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field separator (default: ';')
    pub delimiter: u8,
    /// Prefix the output with a UTF-8 byte order mark (default: true)
    pub bom: bool,
    /// Include the header row (default: true)
    pub headers: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            bom: true,
            headers: true,
        }
    }
}

impl CsvConfig {
    /// Format used by the earliest revision: comma separator, no signature
    pub fn legacy() -> Self {
        Self {
            delimiter: b',',
            bom: false,
            headers: true,
        }
    }
}

/// Write a dataset as CSV. Null cells become empty fields.
pub fn write_csv<W: Write>(dataset: &Dataset, config: &CsvConfig, mut out: W) -> anyhow::Result<()> {
    if config.bom {
        out.write_all(UTF8_BOM)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(out);

    if config.headers {
        writer.write_record(&dataset.columns)?;
    }
    for row in &dataset.rows {
        writer.write_record(row.iter().map(|v| v.render()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a dataset to an in-memory CSV string
pub fn render_to_string(dataset: &Dataset, config: &CsvConfig) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_csv(dataset, config, &mut buf)?;
    String::from_utf8(buf).context("generated CSV was not valid UTF-8")
}

/// Default output filename: `dados_<domain>.csv`, lowercased and
/// diacritic-stripped (`Saúde` -> `dados_saude.csv`)
pub fn default_filename(domain: Domain) -> String {
    format!("dados_{}.csv", normalize(&domain.to_string().to_lowercase()))
}
