//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - daily passengers: `o` markers joined by a `-` line
//! - daily movements: `a` (arrivals), `d` (departures), `*` where both land on a cell

use chrono::NaiveDate;

use crate::domain::{DailyMovements, DailyPassengers};

/// Line plot of passengers per day.
pub fn render_passenger_plot(series: &[DailyPassengers], width: usize, height: usize) -> String {
    let points: Vec<(NaiveDate, f64)> = series.iter().map(|p| (p.date, p.passengers as f64)).collect();
    let Some(frame) = Frame::new(points.iter().map(|p| p.0), points.iter().map(|p| p.1), width, height) else {
        return "Plot: Número de Passageiros por Dia (no data)\n".to_string();
    };

    let mut grid = frame.blank();
    let cells: Vec<(usize, usize)> = points.iter().map(|&(d, y)| frame.cell(d, y)).collect();

    // Line first so markers overlay it.
    for w in cells.windows(2) {
        draw_line(&mut grid, w[0].0, w[0].1, w[1].0, w[1].1, '-');
    }
    for &(x, y) in &cells {
        grid[y][x] = 'o';
    }

    frame.finish("Número de Passageiros por Dia", "passengers", grid)
}

/// Point plot of arrivals and departures per day.
pub fn render_movement_plot(rows: &[DailyMovements], width: usize, height: usize) -> String {
    let dates = rows.iter().map(|r| r.date);
    let counts = rows
        .iter()
        .flat_map(|r| [r.arrivals as f64, r.departures as f64])
        .chain(std::iter::once(0.0));
    let Some(frame) = Frame::new(dates, counts, width, height) else {
        return "Plot: Voos Diários (no data)\n".to_string();
    };

    let mut grid = frame.blank();
    for r in rows {
        let (x, ya) = frame.cell(r.date, r.arrivals as f64);
        let (_, yd) = frame.cell(r.date, r.departures as f64);
        grid[ya][x] = 'a';
        grid[yd][x] = if yd == ya { '*' } else { 'd' };
    }

    frame.finish("Voos Diários (a=Chegada, d=Partida)", "flights", grid)
}

/// Shared axis mapping for a date-indexed plot.
struct Frame {
    d_min: NaiveDate,
    d_max: NaiveDate,
    y_min: f64,
    y_max: f64,
    width: usize,
    height: usize,
}

impl Frame {
    fn new(
        dates: impl Iterator<Item = NaiveDate>,
        values: impl Iterator<Item = f64>,
        width: usize,
        height: usize,
    ) -> Option<Self> {
        let mut d_min: Option<NaiveDate> = None;
        let mut d_max: Option<NaiveDate> = None;
        for d in dates {
            d_min = Some(d_min.map_or(d, |m| m.min(d)));
            d_max = Some(d_max.map_or(d, |m| m.max(d)));
        }
        let (d_min, d_max) = (d_min?, d_max?);

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for v in values {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        if !(y_min.is_finite() && y_max.is_finite()) {
            return None;
        }
        if y_max <= y_min {
            y_max = y_min + 1.0;
        }
        let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

        Some(Self {
            d_min,
            d_max,
            y_min,
            y_max,
            width: width.max(10),
            height: height.max(5),
        })
    }

    fn blank(&self) -> Vec<Vec<char>> {
        vec![vec![' '; self.width]; self.height]
    }

    fn cell(&self, date: NaiveDate, y: f64) -> (usize, usize) {
        let span = (self.d_max - self.d_min).num_days().max(1) as f64;
        let t = (date - self.d_min).num_days() as f64;
        (
            map_x(t, 0.0, span, self.width),
            map_y(y, self.y_min, self.y_max, self.height),
        )
    }

    fn finish(&self, title: &str, y_label: &str, grid: Vec<Vec<char>>) -> String {
        // Build final string. We include a small header with ranges.
        let mut out = String::new();
        out.push_str(&format!(
            "Plot: {title} | date=[{}, {}] | {y_label}=[{:.1}, {:.1}]\n",
            self.d_min, self.d_max, self.y_min, self.y_max
        ));
        for row in grid {
            out.push_str(row.into_iter().collect::<String>().trim_end());
            out.push('\n');
        }
        out
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    #[test]
    fn passenger_plot_golden_snapshot_small() {
        let series = vec![
            DailyPassengers { date: d(1, 1), passengers: 100 },
            DailyPassengers { date: d(1, 10), passengers: 110 },
        ];
        let txt = render_passenger_plot(&series, 10, 5);
        let expected = concat!(
            "Plot: Número de Passageiros por Dia | date=[2024-01-01, 2024-01-10] | passengers=[99.5, 110.5]\n",
            "        -o\n",
            "      --\n",
            "    --\n",
            "  --\n",
            "o-\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn movement_plot_marks_overlap() {
        let rows = vec![
            DailyMovements { date: d(3, 1), arrivals: 2, departures: 1 },
            DailyMovements { date: d(3, 2), arrivals: 1, departures: 1 },
        ];
        let txt = render_movement_plot(&rows, 10, 5);
        let body: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(body.len(), 5);
        assert_eq!(body[0], "a");
        assert!(body.iter().any(|l| l.ends_with('*')));
        assert!(body.iter().any(|l| l.starts_with('d')));
    }

    #[test]
    fn empty_views_render_placeholder() {
        assert!(render_passenger_plot(&[], 40, 10).contains("no data"));
        assert!(render_movement_plot(&[], 40, 10).contains("no data"));
    }

    #[test]
    fn single_day_does_not_panic() {
        let series = vec![DailyPassengers { date: d(6, 1), passengers: 200 }];
        let txt = render_passenger_plot(&series, 20, 6);
        assert_eq!(txt.lines().count(), 7);
        assert!(txt.contains('o'));
    }
}
