// src/gui/components/chart_view.rs
//
// Line chart over `app.screen.chart`, drawn with the painter.
// One line per country, broken wherever a year has no value.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use crate::{chart::ChartModel, gui::app::App, table::format_value};

const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x4E, 0x79, 0xA7),
    Color32::from_rgb(0xF2, 0x8E, 0x2B),
    Color32::from_rgb(0xE1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xB7, 0xB2),
    Color32::from_rgb(0x59, 0xA1, 0x4F),
    Color32::from_rgb(0xED, 0xC9, 0x48),
    Color32::from_rgb(0xB0, 0x7A, 0xA1),
    Color32::from_rgb(0x9C, 0x75, 0x5F),
];

const MARGIN_L: f32 = 64.0;
const MARGIN_R: f32 = 16.0;
const MARGIN_T: f32 = 12.0;
const MARGIN_B: f32 = 28.0;
const Y_TICKS: usize = 5;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(chart) = app.screen.chart.as_ref() else { return };
    let height = app.state.gui.chart_h;

    let Some((lo, hi)) = chart.value_range() else {
        ui.weak("No values to plot");
        return;
    };
    // Flat series still need a visible band
    let (lo, hi) = if (hi - lo).abs() < f64::EPSILON { (lo - 1.0, hi + 1.0) } else { (lo, hi) };

    let (resp, painter) = ui.allocate_painter(Vec2::new(ui.available_width(), height), Sense::hover());
    let frame = resp.rect;
    let plot = Rect::from_min_max(
        Pos2::new(frame.left() + MARGIN_L, frame.top() + MARGIN_T),
        Pos2::new(frame.right() - MARGIN_R, frame.bottom() - MARGIN_B),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 {
        return;
    }

    let visuals = ui.visuals();
    let axis = Stroke::new(1.0, visuals.weak_text_color());
    let grid = Stroke::new(0.5, visuals.faint_bg_color.gamma_multiply(2.0));
    let text = visuals.text_color();
    let font = FontId::proportional(11.0);

    // Chart years run newest → oldest; plot oldest on the left
    let n = chart.years.len();
    let x_at = |i: usize| -> f32 {
        if n <= 1 {
            plot.center().x
        } else {
            plot.right() - (i as f32) * plot.width() / (n - 1) as f32
        }
    };
    let y_at = |v: f64| -> f32 {
        let t = ((v - lo) / (hi - lo)) as f32;
        plot.bottom() - t * plot.height()
    };

    /* ---------- Axes ---------- */

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    for k in 0..=Y_TICKS {
        let v = lo + (hi - lo) * k as f64 / Y_TICKS as f64;
        let y = y_at(v);
        painter.line_segment([Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)], grid);
        painter.text(Pos2::new(plot.left() - 6.0, y), Align2::RIGHT_CENTER, tick_label(v), font.clone(), text);
    }

    // Thin out year labels when they would overlap
    let step = (n as f32 * 40.0 / plot.width()).ceil().max(1.0) as usize;
    for (i, year) in chart.years.iter().enumerate() {
        if i % step != 0 {
            continue;
        }
        let x = x_at(i);
        painter.line_segment([Pos2::new(x, plot.bottom()), Pos2::new(x, plot.bottom() + 4.0)], axis);
        painter.text(Pos2::new(x, plot.bottom() + 6.0), Align2::CENTER_TOP, year, font.clone(), text);
    }

    /* ---------- Series ---------- */

    for (si, series) in chart.series.iter().enumerate() {
        let color = PALETTE[si % PALETTE.len()];
        let stroke = Stroke::new(2.0, color);

        let mut run: Vec<Pos2> = Vec::new();
        for (i, p) in series.points.iter().enumerate() {
            match p {
                Some(v) => {
                    let pos = Pos2::new(x_at(i), y_at(*v));
                    painter.circle_filled(pos, 3.0, color);
                    run.push(pos);
                }
                None => flush_run(&painter, &mut run, stroke),
            }
        }
        flush_run(&painter, &mut run, stroke);
    }

    legend(&painter, plot, chart, &font);

    /* ---------- Hover ---------- */

    if let Some(pos) = resp.hover_pos() {
        if plot.expand(6.0).contains(pos) {
            if let Some(tip) = nearest_point(chart, pos, &x_at, &y_at) {
                resp.on_hover_text_at_pointer(tip);
            }
        }
    }
}

fn flush_run(painter: &egui::Painter, run: &mut Vec<Pos2>, stroke: Stroke) {
    if run.len() >= 2 {
        painter.add(egui::Shape::line(std::mem::take(run), stroke));
    } else {
        run.clear();
    }
}

fn legend(painter: &egui::Painter, plot: Rect, chart: &ChartModel, font: &FontId) {
    let mut y = plot.top() + 4.0;
    let x = plot.right() - 8.0;
    for (si, series) in chart.series.iter().enumerate() {
        let color = PALETTE[si % PALETTE.len()];
        let r = painter.text(Pos2::new(x, y), Align2::RIGHT_TOP, &series.name, font.clone(), color);
        painter.circle_filled(Pos2::new(r.left() - 8.0, r.center().y), 4.0, color);
        y += r.height() + 2.0;
    }
}

fn nearest_point(
    chart: &ChartModel,
    pos: Pos2,
    x_at: &dyn Fn(usize) -> f32,
    y_at: &dyn Fn(f64) -> f32,
) -> Option<String> {
    let mut best: Option<(f32, String)> = None;
    for series in &chart.series {
        for (i, p) in series.points.iter().enumerate() {
            let Some(v) = p else { continue };
            let d = Pos2::new(x_at(i), y_at(*v)).distance(pos);
            if d <= 12.0 && best.as_ref().is_none_or(|(bd, _)| d < *bd) {
                best = Some((d, format!("{} {}: {}", series.name, chart.years[i], format_value(Some(*v)))));
            }
        }
    }
    best.map(|(_, tip)| tip)
}

fn tick_label(v: f64) -> String {
    let a = v.abs();
    if a >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if a >= 1e3 {
        format!("{:.1}k", v / 1e3)
    } else {
        format!("{:.1}", v)
    }
}
