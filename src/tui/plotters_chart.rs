//! Plotters-powered daily chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - several colored series on one set of axes
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// One line on the chart. `x` is days since the chart's `origin`.
pub struct ChartSeries<'a> {
    pub points: &'a [(f64, f64)],
    pub color: RGBColor,
}

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing.
pub struct DailyPlottersChart<'a> {
    pub series: Vec<ChartSeries<'a>>,
    /// First date on the x axis (x = 0).
    pub origin: NaiveDate,
    /// X bounds (days since `origin`).
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub y_label: &'a str,
}

impl<'a> Widget for DailyPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 6 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let origin = self.origin;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("Data")
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| fmt_day(origin, *v))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            for s in &self.series {
                chart.draw_series(LineSeries::new(s.points.iter().copied(), &s.color))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Format an x value (days since `origin`) as `DD/MM`.
pub fn fmt_day(origin: NaiveDate, days: f64) -> String {
    let date = origin + Duration::days(days.round() as i64);
    date.format("%d/%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_day_offsets_from_origin() {
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(fmt_day(origin, 0.0), "01/01");
        assert_eq!(fmt_day(origin, 59.4), "29/02");
        assert_eq!(fmt_day(origin, 365.0), "31/12");
    }

    #[test]
    fn tiny_area_renders_hint() {
        let origin = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let chart = DailyPlottersChart {
            series: Vec::new(),
            origin,
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            y_label: "n",
        };
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "C");
    }
}
