use std::fmt;

use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Filter inputs: site selection and payload range
// ---------------------------------------------------------------------------

/// Fixed slider bounds (kg), independent of the data's observed range.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// Which launch site the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// The "All Sites" sentinel (dropdown default).
    AllSites,
    /// One concrete site identifier drawn from the dataset.
    Site(String),
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Closed payload-mass interval `[low, high]` in kg. The UI layer keeps
/// `low <= high`; the filter treats both bounds as inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low <= payload_kg && payload_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records feeding the pie chart.
///
/// * All sites → successes only (the pie shows the share of successes per
///   site).
/// * Concrete site → every record for that site, both outcomes (the pie
///   shows the success/failure split).
pub fn filter_for_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| match selection {
            SiteSelection::AllSites => rec.outcome == Outcome::Success,
            SiteSelection::Site(site) => &rec.site == site,
        })
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of records feeding the scatter chart: narrowed by site
/// first, then by the inclusive payload range.
pub fn filter_for_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| match selection {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => &rec.site == site,
        })
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: "FT".to_string(),
        }
    }

    /// The four-record fixture from the dashboard's acceptance scenarios.
    fn fixture() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 500.0, Outcome::Success),
            rec("A", 6000.0, Outcome::Failure),
            rec("B", 3000.0, Outcome::Success),
            rec("B", 9000.0, Outcome::Failure),
        ])
    }

    #[test]
    fn all_sites_pie_keeps_successes_only() {
        let ds = fixture();
        let subset = filter_for_pie(&ds, &SiteSelection::AllSites);
        assert_eq!(subset, vec![0, 2]);
        for &i in &subset {
            assert_eq!(ds.records[i].outcome, Outcome::Success);
        }
    }

    #[test]
    fn site_pie_keeps_both_outcomes_for_that_site() {
        let ds = fixture();
        let subset = filter_for_pie(&ds, &SiteSelection::Site("A".to_string()));
        assert_eq!(subset, vec![0, 1]);
        for &i in &subset {
            assert_eq!(ds.records[i].site, "A");
        }
    }

    #[test]
    fn scatter_full_range_for_one_site_returns_all_its_records() {
        let ds = fixture();
        let subset = filter_for_scatter(
            &ds,
            &SiteSelection::Site("A".to_string()),
            &PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(subset, vec![0, 1]);
    }

    #[test]
    fn scatter_narrow_range_across_all_sites() {
        let ds = fixture();
        let subset = filter_for_scatter(
            &ds,
            &SiteSelection::AllSites,
            &PayloadRange::new(1000.0, 5000.0),
        );
        // Only site B's 3000 kg success falls inside [1000, 5000].
        assert_eq!(subset, vec![2]);
    }

    #[test]
    fn scatter_bounds_are_inclusive() {
        let ds = fixture();
        let subset = filter_for_scatter(
            &ds,
            &SiteSelection::AllSites,
            &PayloadRange::new(500.0, 9000.0),
        );
        assert_eq!(subset, vec![0, 1, 2, 3]);
    }

    #[test]
    fn range_equal_to_observed_bounds_keeps_everything() {
        let ds = fixture();
        let (min, max) = ds.payload_bounds;
        let subset = filter_for_scatter(&ds, &SiteSelection::AllSites, &PayloadRange::new(min, max));
        assert_eq!(subset.len(), ds.len());
    }

    #[test]
    fn widening_the_range_never_drops_records() {
        let ds = fixture();
        let narrow = filter_for_scatter(
            &ds,
            &SiteSelection::AllSites,
            &PayloadRange::new(2000.0, 7000.0),
        );
        let wide = filter_for_scatter(
            &ds,
            &SiteSelection::AllSites,
            &PayloadRange::new(0.0, 10_000.0),
        );
        for i in &narrow {
            assert!(wide.contains(i));
        }
    }

    #[test]
    fn unknown_site_yields_empty_subsets() {
        let ds = fixture();
        let ghost = SiteSelection::Site("Nowhere".to_string());
        assert!(filter_for_pie(&ds, &ghost).is_empty());
        assert!(filter_for_scatter(&ds, &ghost, &PayloadRange::new(0.0, 10_000.0)).is_empty());
    }
}
