use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the dataset's 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` cell. Anything other than 0 or 1 is rejected
    /// at load time.
    pub fn from_class(class: u8) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric position on the scatter outcome axis (failure below success).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier.
    pub site: String,
    /// Payload mass in kilograms; finite and non-negative.
    pub payload_mass_kg: f64,
    /// Success / failure class.
    pub outcome: Outcome,
    /// Booster version category, used for scatter color grouping.
    pub booster_version: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed category orders and payload
/// bounds. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows), in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site identifiers in order of first appearance.
    pub sites: Vec<String>,
    /// Distinct booster version categories in order of first appearance.
    pub booster_versions: Vec<String>,
    /// Observed (min, max) payload mass; seeds the default slider range.
    pub payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build category indexes and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_versions: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_versions.iter().any(|b| b == &rec.booster_version) {
                booster_versions.push(rec.booster_version.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        // Empty dataset: collapse the bounds so the sliders still get a
        // legal default.
        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            booster_versions,
            payload_bounds: (min_payload, max_payload),
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
