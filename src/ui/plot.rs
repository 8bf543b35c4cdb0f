use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::chart::{PieSpec, ScatterSpec};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – pie above, scatter below
// ---------------------------------------------------------------------------

/// Render both chart slots in the central panel.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let half = (ui.available_height() - 16.0) / 2.0;

    pie_chart(ui, &state.pie, half);
    ui.separator();
    scatter_chart(ui, &state.scatter, half);
}

// ---------------------------------------------------------------------------
// Pie chart (painter-drawn; egui_plot has no pie type)
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    if spec.slices.is_empty() {
        ui.allocate_ui(Vec2::new(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No launches for the current selection.");
            });
        });
        return;
    }

    let total = spec.total() as f32;

    ui.horizontal(|ui: &mut Ui| {
        let side = height.min(ui.available_width() * 0.6).max(40.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.48;

        // Wedges start at 12 o'clock and sweep clockwise.
        let mut angle = -std::f32::consts::FRAC_PI_2;
        for slice in &spec.slices {
            let sweep = slice.count as f32 / total * std::f32::consts::TAU;
            for shape in pie_wedge(center, radius, angle, angle + sweep, slice.color) {
                painter.add(shape);
            }
            angle += sweep;
        }

        // Legend with counts and percentages.
        ui.vertical(|ui: &mut Ui| {
            ui.add_space(8.0);
            for slice in &spec.slices {
                let pct = 100.0 * slice.count as f32 / total;
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, p) = ui.allocate_painter(Vec2::splat(12.0), Sense::hover());
                    p.rect_filled(swatch.rect, 2.0, slice.color);
                    ui.label(format!("{}  {} ({pct:.1}%)", slice.label, slice.count));
                });
            }
        });
    });
}

/// Tessellate one wedge into triangle fans. A wedge can span more than half
/// the circle, so it is emitted as small convex triangles rather than one
/// polygon.
fn pie_wedge(center: Pos2, radius: f32, a0: f32, a1: f32, color: Color32) -> Vec<Shape> {
    let steps = (((a1 - a0) / 0.05).ceil() as usize).max(1);
    let arc_point = |i: usize| {
        let a = a0 + (a1 - a0) * i as f32 / steps as f32;
        center + radius * Vec2::new(a.cos(), a.sin())
    };

    (0..steps)
        .map(|i| {
            Shape::convex_polygon(
                vec![center, arc_point(i), arc_point(i + 1)],
                color,
                Stroke::NONE,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let ticks = spec.y_tick_labels;

    Plot::new("payload_scatter")
        .height((height - 20.0).max(40.0))
        .legend(Legend::default())
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .include_y(-0.5)
        .include_y(1.5)
        .y_axis_formatter(move |mark: egui_plot::GridMark, _range| {
            ticks
                .iter()
                .find(|(v, _)| (mark.value - v).abs() < 1e-6)
                .map(|(_, label)| (*label).to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for group in &spec.groups {
                // One Points item per record so the marker radius can encode
                // payload mass; the legend folds items sharing a name.
                for point in &group.points {
                    plot_ui.points(
                        Points::new(vec![[point.payload_kg, point.outcome.as_f64()]])
                            .name(&group.category)
                            .color(group.color)
                            .filled(true)
                            .shape(MarkerShape::Circle)
                            .radius(point.radius()),
                    );
                }
            }
        });
}
