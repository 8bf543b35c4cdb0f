use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Default dataset endpoint (public launch records CSV).
pub const DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// How long the single startup fetch may take before it is abandoned.
const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the dataset could not be obtained. Fatal at startup; never retried.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("fetching {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing launch data")]
    Parse(#[source] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the dataset from an HTTP(S) endpoint. One GET with a short timeout;
/// any transport or status failure aborts startup.
pub fn load_url(url: &str) -> Result<LaunchDataset, DataSourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|source| DataSourceError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|source| DataSourceError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataSourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .map_err(|source| DataSourceError::Fetch {
            url: url.to_string(),
            source,
        })?;

    parse_csv(body.as_ref()).map_err(DataSourceError::Parse)
}

/// Load the dataset from a local CSV file.
pub fn load_file(path: &Path) -> Result<LaunchDataset, DataSourceError> {
    let file = std::fs::File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file).map_err(DataSourceError::Parse)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV row under the source's original headers. Columns beyond the
/// four required ones (flight number, booster version, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version: String,
}

/// Parse CSV bytes into a validated [`LaunchDataset`]. All schema checking
/// happens here, once; downstream code works on typed records only.
pub fn parse_csv<R: Read>(input: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let outcome = Outcome::from_class(raw.class)
            .with_context(|| format!("CSV row {row_no}: class {} is not 0 or 1", raw.class))?;

        if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
            bail!(
                "CSV row {row_no}: payload mass {} is not a non-negative number",
                raw.payload_mass_kg
            );
        }

        records.push(LaunchRecord {
            site: raw.site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version: raw.booster_version,
        });
    }

    Ok(LaunchDataset::from_records(records))
}
