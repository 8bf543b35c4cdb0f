use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection, PAYLOAD_SLIDER_MAX};
use crate::data::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// ScatterSpec – declarative scatter chart description
// ---------------------------------------------------------------------------

/// One plotted launch: payload on x, outcome on y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub payload_kg: f64,
    pub outcome: Outcome,
}

impl ScatterPoint {
    /// Marker radius in points; payload mass doubles as a size encoding.
    pub fn radius(&self) -> f32 {
        let t = (self.payload_kg / PAYLOAD_SLIDER_MAX).clamp(0.0, 1.0) as f32;
        2.0 + 6.0 * t
    }
}

/// Points of one booster version category, sharing a colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub category: String,
    pub color: Color32,
    pub points: Vec<ScatterPoint>,
}

/// A complete scatter chart description. No groups is a valid, blank chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Outcome-axis tick override, failure rendered below success.
    pub y_tick_labels: [(f64, &'static str); 2],
    pub groups: Vec<ScatterGroup>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the scatter spec for the given filtered subset.
///
/// Groups follow the dataset's first-appearance booster-category order, and
/// colours are assigned from the *full* category list so a category keeps
/// its colour no matter how the charts are filtered.
pub fn build_scatter_spec(
    dataset: &LaunchDataset,
    subset: &[usize],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterSpec {
    let colors = ColorMap::new(&dataset.booster_versions);

    let groups = dataset
        .booster_versions
        .iter()
        .filter_map(|category| {
            let points: Vec<ScatterPoint> = subset
                .iter()
                .filter(|&&i| &dataset.records[i].booster_version == category)
                .map(|&i| ScatterPoint {
                    payload_kg: dataset.records[i].payload_mass_kg,
                    outcome: dataset.records[i].outcome,
                })
                .collect();
            (!points.is_empty()).then(|| ScatterGroup {
                category: category.clone(),
                color: colors.color_for(category),
                points,
            })
        })
        .collect();

    ScatterSpec {
        title: format!(
            "Site: {selection}, Payload mass is between {} kg and {} kg",
            thousands(range.low),
            thousands(range.high)
        ),
        x_label: "Payload Mass (kg)",
        y_label: "Launch Outcome",
        y_tick_labels: [(0.0, "Failure"), (1.0, "Success")],
        groups,
    }
}

/// Format a kg value with thousands separators ("9,000").
fn thousands(kg: f64) -> String {
    let n = kg.round() as i64;
    let digits = n.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
