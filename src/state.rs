use crate::chart::{build_pie_spec, build_scatter_spec, PieSpec, ScatterSpec};
use crate::data::filter::{filter_for_pie, filter_for_scatter, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Two inputs (site selection, payload range) drive two output slots (pie
/// and scatter specs). A selection change recomputes both charts; a range
/// change recomputes only the scatter, since the pie ignores payload mass.
/// Every recomputation re-derives from the immutable dataset.
pub struct AppState {
    /// Loaded dataset; read-only for the process lifetime.
    pub dataset: LaunchDataset,

    /// Current site selection (dropdown).
    pub selection: SiteSelection,

    /// Current payload range (sliders).
    pub range: PayloadRange,

    /// Current pie chart description.
    pub pie: PieSpec,

    /// Current scatter chart description.
    pub scatter: ScatterSpec,

    /// Status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Wrap a freshly loaded dataset: default selection is "All Sites", the
    /// default range is the dataset's observed payload bounds, and both
    /// charts are computed before the first frame.
    pub fn new(dataset: LaunchDataset) -> Self {
        let selection = SiteSelection::AllSites;
        let (min, max) = dataset.payload_bounds;
        let range = PayloadRange::new(min, max);

        let pie_subset = filter_for_pie(&dataset, &selection);
        let pie = build_pie_spec(&dataset, &pie_subset, &selection);
        let scatter_subset = filter_for_scatter(&dataset, &selection, &range);
        let scatter = build_scatter_spec(&dataset, &scatter_subset, &selection, &range);
        let status_message = scatter_subset
            .is_empty()
            .then(|| "No launches match the current filters".to_string());

        AppState {
            dataset,
            selection,
            range,
            pie,
            scatter,
            status_message,
        }
    }

    /// Site selection changed: both charts depend on it.
    pub fn set_selection(&mut self, selection: SiteSelection) {
        if self.selection == selection {
            return;
        }
        log::info!("site selection -> {selection}");
        self.selection = selection;
        self.rebuild_pie();
        self.rebuild_scatter();
    }

    /// Payload range changed: only the scatter depends on it.
    pub fn set_range(&mut self, range: PayloadRange) {
        if self.range == range {
            return;
        }
        self.range = range;
        self.rebuild_scatter();
    }

    /// Number of records currently plotted in the scatter chart.
    pub fn visible_count(&self) -> usize {
        self.scatter.groups.iter().map(|g| g.points.len()).sum()
    }

    fn rebuild_pie(&mut self) {
        let subset = filter_for_pie(&self.dataset, &self.selection);
        self.pie = build_pie_spec(&self.dataset, &subset, &self.selection);
    }

    fn rebuild_scatter(&mut self) {
        let subset = filter_for_scatter(&self.dataset, &self.selection, &self.range);
        self.status_message = subset
            .is_empty()
            .then(|| "No launches match the current filters".to_string());
        self.scatter = build_scatter_spec(&self.dataset, &subset, &self.selection, &self.range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: booster.to_string(),
        }
    }

    fn fixture() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 500.0, Outcome::Success, "FT"),
            rec("A", 6000.0, Outcome::Failure, "v1.1"),
            rec("B", 3000.0, Outcome::Success, "FT"),
            rec("B", 9000.0, Outcome::Failure, "B4"),
        ])
    }

    #[test]
    fn default_range_matches_observed_bounds() {
        let state = AppState::new(fixture());
        assert_eq!(state.selection, SiteSelection::AllSites);
        assert_eq!(state.range, PayloadRange::new(500.0, 9000.0));
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn identical_inputs_produce_equal_specs() {
        let mut a = AppState::new(fixture());
        let mut b = AppState::new(fixture());
        for state in [&mut a, &mut b] {
            state.set_selection(SiteSelection::Site("A".to_string()));
            state.set_range(PayloadRange::new(0.0, 10_000.0));
        }
        assert_eq!(a.pie, b.pie);
        assert_eq!(a.scatter, b.scatter);
    }

    #[test]
    fn range_change_leaves_pie_untouched() {
        let mut state = AppState::new(fixture());
        let pie_before = state.pie.clone();
        let scatter_before = state.scatter.clone();

        state.set_range(PayloadRange::new(1000.0, 5000.0));

        assert_eq!(state.pie, pie_before);
        assert_ne!(state.scatter, scatter_before);
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn selection_change_refreshes_both_charts() {
        let mut state = AppState::new(fixture());
        let pie_before = state.pie.clone();
        let scatter_before = state.scatter.clone();

        state.set_selection(SiteSelection::Site("B".to_string()));

        assert_ne!(state.pie, pie_before);
        assert_ne!(state.scatter, scatter_before);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn setting_the_same_inputs_again_is_a_no_op() {
        let mut state = AppState::new(fixture());
        let pie = state.pie.clone();
        let scatter = state.scatter.clone();

        state.set_selection(SiteSelection::AllSites);
        state.set_range(state.range);

        assert_eq!(state.pie, pie);
        assert_eq!(state.scatter, scatter);
    }
}
