use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{
    PayloadRange, SiteSelection, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Controls");
    ui.separator();

    // ---- Site selector ----
    ui.strong("Launch Site");

    // Clone the options so the closure can read them while recording the
    // user's pick; state is mutated after the dropdown closes.
    let sites = state.dataset.sites.clone();
    let mut picked: Option<SiteSelection> = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.selection.to_string())
        .width(180.0)
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = state.selection == SiteSelection::AllSites;
            if ui.selectable_label(all_selected, "All Sites").clicked() {
                picked = Some(SiteSelection::AllSites);
            }
            for site in &sites {
                let selected = state.selection == SiteSelection::Site(site.clone());
                if ui.selectable_label(selected, site).clicked() {
                    picked = Some(SiteSelection::Site(site.clone()));
                }
            }
        });

    if let Some(selection) = picked {
        state.set_selection(selection);
    }

    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");

    let mut low = state.range.low;
    let mut high = state.range.high;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
                .step_by(PAYLOAD_SLIDER_STEP)
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        // The slider being dragged pushes the other bound along, so the
        // core only ever sees low <= high.
        if low_changed {
            high = high.max(low);
        } else {
            low = low.min(high);
        }
        state.set_range(PayloadRange::new(low, high));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launch records, {} in view",
            state.dataset.len(),
            state.visible_count()
        ));
        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
