use eframe::egui::Color32;

use crate::color::{pie_color, PIE_COLORS};
use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// PieSpec – declarative pie chart description
// ---------------------------------------------------------------------------

/// One pie slice: a label, its count, and its colour.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: Color32,
}

/// A complete pie chart description. An empty `slices` list is a valid,
/// blank chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the pie spec for the given filtered subset.
///
/// * All sites → one slice per site (share of successes), slices in the
///   dataset's first-appearance site order, colour cycled by site position.
/// * Concrete site → success/failure split, failure slice first, fixed
///   colour per outcome.
///
/// Zero-count keys are omitted, so an empty subset produces no slices.
pub fn build_pie_spec(
    dataset: &LaunchDataset,
    subset: &[usize],
    selection: &SiteSelection,
) -> PieSpec {
    match selection {
        SiteSelection::AllSites => {
            let slices = dataset
                .sites
                .iter()
                .enumerate()
                .filter_map(|(pos, site)| {
                    let count = subset
                        .iter()
                        .filter(|&&i| &dataset.records[i].site == site)
                        .count();
                    (count > 0).then(|| PieSlice {
                        label: site.clone(),
                        count,
                        color: pie_color(pos),
                    })
                })
                .collect();

            PieSpec {
                title: "Percentage of Successful Launches Across All Sites".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let slices = [
                (Outcome::Failure, PIE_COLORS[3]),
                (Outcome::Success, PIE_COLORS[1]),
            ]
            .into_iter()
            .filter_map(|(outcome, color)| {
                let count = subset
                    .iter()
                    .filter(|&&i| dataset.records[i].outcome == outcome)
                    .count();
                (count > 0).then(|| PieSlice {
                    label: outcome.to_string(),
                    count,
                    color,
                })
            })
            .collect();

            PieSpec {
                title: format!("Success vs. Failure for Launch Site: {site}"),
                slices,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_for_pie;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: "FT".to_string(),
        }
    }

    fn fixture() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 500.0, Outcome::Success),
            rec("A", 6000.0, Outcome::Failure),
            rec("B", 3000.0, Outcome::Success),
            rec("B", 9000.0, Outcome::Failure),
        ])
    }

    #[test]
    fn all_sites_groups_successes_per_site() {
        let ds = fixture();
        let subset = filter_for_pie(&ds, &SiteSelection::AllSites);
        let spec = build_pie_spec(&ds, &subset, &SiteSelection::AllSites);

        assert_eq!(spec.title, "Percentage of Successful Launches Across All Sites");
        let counts: Vec<(&str, usize)> = spec
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.count))
            .collect();
        assert_eq!(counts, vec![("A", 1), ("B", 1)]);
    }

    #[test]
    fn single_site_splits_by_outcome_failure_first() {
        let ds = fixture();
        let sel = SiteSelection::Site("A".to_string());
        let subset = filter_for_pie(&ds, &sel);
        let spec = build_pie_spec(&ds, &subset, &sel);

        assert_eq!(spec.title, "Success vs. Failure for Launch Site: A");
        let labels: Vec<&str> = spec.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Failure", "Success"]);
        assert_eq!(spec.total(), 2);
    }

    #[test]
    fn site_colors_are_stable_across_rebuilds() {
        let ds = fixture();
        let subset = filter_for_pie(&ds, &SiteSelection::AllSites);
        let a = build_pie_spec(&ds, &subset, &SiteSelection::AllSites);
        let b = build_pie_spec(&ds, &subset, &SiteSelection::AllSites);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_subset_yields_blank_spec() {
        let ds = fixture();
        let sel = SiteSelection::Site("Nowhere".to_string());
        let subset = filter_for_pie(&ds, &sel);
        let spec = build_pie_spec(&ds, &subset, &sel);
        assert!(spec.slices.is_empty());
        assert_eq!(spec.total(), 0);
    }

    #[test]
    fn all_failure_site_has_a_single_failure_slice() {
        let ds = LaunchDataset::from_records(vec![rec("C", 100.0, Outcome::Failure)]);
        let sel = SiteSelection::Site("C".to_string());
        let subset = filter_for_pie(&ds, &sel);
        let spec = build_pie_spec(&ds, &subset, &sel);
        assert_eq!(spec.slices.len(), 1);
        assert_eq!(spec.slices[0].label, "Failure");
    }
}
