//! Ratatui-based terminal dashboard.
//!
//! A filter panel on the left (airport, movement type, status, airline, date
//! range) drives two charts (passengers per day, arrivals/departures per day)
//! and a table of the filtered flights. Every change re-runs the render
//! pipeline over the same immutable base dataset.

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
};
use tracing::{info, warn};

use crate::app::pipeline::{DashboardViews, ExportRequest, render};
use crate::config::DashboardConfig;
use crate::data::sample::{default_end, default_start};
use crate::domain::{Category, DateRange, FilterSelection, FlightRecord, parse_date, slot_label};
use crate::error::AppError;
use crate::io::export::write_export_bytes;
use crate::report::format_range;

mod plotters_chart;

use plotters_chart::{ChartSeries, DailyPlottersChart};

const PASSENGER_COLOR: RGBColor = RGBColor(0, 255, 255); // cyan
const ARRIVAL_COLOR: RGBColor = RGBColor(255, 127, 14); // orange
const DEPARTURE_COLOR: RGBColor = RGBColor(31, 119, 180); // blue

/// Filter rows in the settings panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Airport,
    Movement,
    Status,
    Airline,
    Start,
    End,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Airport,
        Field::Movement,
        Field::Status,
        Field::Airline,
        Field::Start,
        Field::End,
    ];

    fn title(self) -> &'static str {
        match self {
            Field::Airport => "Aeroporto",
            Field::Movement => "Tipo",
            Field::Status => "Status",
            Field::Airline => "Companhia",
            Field::Start => "Início",
            Field::End => "Fim",
        }
    }

    fn is_date(self) -> bool {
        matches!(self, Field::Start | Field::End)
    }
}

/// Start the TUI over an already generated base dataset.
pub fn run(base: &[FlightRecord], config: &DashboardConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::terminal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(base, config.clone())?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::terminal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::terminal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App<'a> {
    base: &'a [FlightRecord],
    config: DashboardConfig,
    selection: FilterSelection,
    selected_field: usize,
    editing_date: bool,
    date_input: String,
    table_offset: usize,
    status: String,
    views: DashboardViews,
}

impl<'a> App<'a> {
    fn new(base: &'a [FlightRecord], config: DashboardConfig) -> Result<Self, AppError> {
        let selection = FilterSelection {
            date_range: DateRange::new(Some(default_start()), Some(default_end()))?,
            ..FilterSelection::default()
        };
        let views = render(base, &selection, ExportRequest::None)?;
        Ok(Self {
            base,
            status: format!("{} flights generated (seed {}).", base.len(), config.seed),
            config,
            selection,
            selected_field: 0,
            editing_date: false,
            date_input: String::new(),
            table_offset: 0,
            views,
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::terminal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::terminal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::terminal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn field(&self) -> Field {
        Field::ALL[self.selected_field]
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing_date {
            return self.handle_date_edit(code);
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < Field::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Enter => {
                if self.field().is_date() {
                    self.editing_date = true;
                    self.date_input.clear();
                    self.status = "Editing date (YYYY-MM-DD or DD/MM/YYYY). Enter to apply, empty clears, Esc cancels."
                        .to_string();
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.clear_field()?;
            }
            KeyCode::Char('c') => {
                self.selection = FilterSelection::default();
                self.refresh()?;
                self.status = "Filters cleared.".to_string();
            }
            KeyCode::PageDown => {
                let max = self.views.filtered.len().saturating_sub(1);
                self.table_offset = (self.table_offset + 10).min(max);
            }
            KeyCode::PageUp => {
                self.table_offset = self.table_offset.saturating_sub(10);
            }
            KeyCode::Char('e') => self.export(),
            _ => {}
        }

        Ok(false)
    }

    fn handle_date_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing_date = false;
                self.status = "Date edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing_date = false;
                self.apply_date_input()?;
            }
            KeyCode::Backspace => {
                self.date_input.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '-' || c == '/' {
                    self.date_input.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        let mut next = self.selection;
        match self.field() {
            Field::Airport => next.airport = cycle_slot(next.airport, delta),
            Field::Movement => next.movement = cycle_slot(next.movement, delta),
            Field::Status => next.status = cycle_slot(next.status, delta),
            Field::Airline => next.airline = cycle_slot(next.airline, delta),
            Field::Start => {
                let start = shift_day(next.date_range.start().unwrap_or_else(default_start), delta);
                match DateRange::new(Some(start), next.date_range.end()) {
                    Ok(r) => next.date_range = r,
                    Err(err) => {
                        self.status = err.to_string();
                        return Ok(());
                    }
                }
            }
            Field::End => {
                let end = shift_day(next.date_range.end().unwrap_or_else(default_end), delta);
                match DateRange::new(next.date_range.start(), Some(end)) {
                    Ok(r) => next.date_range = r,
                    Err(err) => {
                        self.status = err.to_string();
                        return Ok(());
                    }
                }
            }
        }
        self.apply_selection(next)
    }

    fn clear_field(&mut self) -> Result<(), AppError> {
        let mut next = self.selection;
        match self.field() {
            Field::Airport => next.airport = None,
            Field::Movement => next.movement = None,
            Field::Status => next.status = None,
            Field::Airline => next.airline = None,
            Field::Start => next.date_range = DateRange::new(None, next.date_range.end())?,
            Field::End => next.date_range = DateRange::new(next.date_range.start(), None)?,
        }
        self.apply_selection(next)
    }

    fn apply_date_input(&mut self) -> Result<(), AppError> {
        let trimmed = self.date_input.trim().to_string();
        let field = self.field();
        let date = if trimmed.is_empty() {
            None
        } else {
            match parse_date(field.title(), &trimmed) {
                Ok(d) => Some(d),
                Err(err) => {
                    self.status = err.to_string();
                    return Ok(());
                }
            }
        };

        let current = self.selection.date_range;
        let range = match field {
            Field::Start => DateRange::new(date, current.end()),
            _ => DateRange::new(current.start(), date),
        };
        match range {
            Ok(r) => {
                let mut next = self.selection;
                next.date_range = r;
                self.apply_selection(next)
            }
            Err(err) => {
                // Keep the previous range; the pipeline never sees an inverted one.
                warn!(%err, "rejected date edit");
                self.status = err.to_string();
                Ok(())
            }
        }
    }

    fn apply_selection(&mut self, next: FilterSelection) -> Result<(), AppError> {
        self.selection = next;
        self.refresh()?;
        let field = self.field();
        self.status = format!("{}: {}", field.title(), self.field_value(field));
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), AppError> {
        self.views = render(self.base, &self.selection, ExportRequest::None)?;
        self.table_offset = 0;
        Ok(())
    }

    fn export(&mut self) {
        let path = self.config.export_path.clone();
        let result = render(self.base, &self.selection, ExportRequest::Csv)
            .and_then(|views| write_export_bytes(&path, &views.csv.unwrap_or_default()));
        match result {
            Ok(()) => {
                info!(path = %path.display(), rows = self.views.filtered.len(), "exported CSV from dashboard");
                self.status = format!("Exported {} rows to {}", self.views.filtered.len(), path.display());
            }
            Err(err) => {
                warn!(%err, "CSV export failed");
                self.status = format!("Export failed: {err}");
            }
        }
    }

    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Airport => slot_label(self.selection.airport).to_string(),
            Field::Movement => slot_label(self.selection.movement).to_string(),
            Field::Status => slot_label(self.selection.status).to_string(),
            Field::Airline => slot_label(self.selection.airline).to_string(),
            Field::Start => fmt_opt_date(self.selection.date_range.start()),
            Field::End => fmt_opt_date(self.selection.date_range.end()),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let totals = self.views.totals();
        let lines = vec![
            Line::from(vec![
                Span::styled("Dashboard de Voos", Style::default().fg(Color::Cyan)),
                Span::raw(format!(" | seed {} | n={}", self.config.seed, self.base.len())),
            ]),
            Line::from(Span::styled(
                format!(
                    "filtered={} | passengers={} | arrivals={} | departures={} | period={}",
                    totals.records,
                    totals.passengers,
                    totals.arrivals,
                    totals.departures,
                    format_range(&self.selection.date_range),
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        self.draw_settings(frame, columns[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ])
            .split(columns[1]);

        self.draw_passenger_chart(frame, rows[0]);
        self.draw_movement_chart(frame, rows[1]);
        self.draw_table(frame, rows[2]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = Field::ALL
            .iter()
            .map(|&f| ListItem::new(format!("{}: {}", f.title(), self.field_value(f))))
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Filtros").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing_date {
            let hint = Paragraph::new(format!("{}: {}_", self.field().title(), self.date_input))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_passenger_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(inner) = chart_frame(frame, area, "Número de Passageiros por Dia") else {
            return;
        };
        let Some(origin) = self.views.passengers.first().map(|p| p.date) else {
            render_empty(frame, inner);
            return;
        };

        let points: Vec<(f64, f64)> = self
            .views
            .passengers
            .iter()
            .map(|p| (days_since(origin, p.date), p.passengers as f64))
            .collect();
        let (x_bounds, y_bounds) = chart_bounds(&[&points]);

        let widget = DailyPlottersChart {
            series: vec![ChartSeries {
                points: &points,
                color: PASSENGER_COLOR,
            }],
            origin,
            x_bounds,
            y_bounds,
            y_label: "Passageiros",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_movement_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(inner) = chart_frame(frame, area, "Voos Diários (Chegada laranja, Partida azul)") else {
            return;
        };
        let Some(origin) = self.views.movements.first().map(|m| m.date) else {
            render_empty(frame, inner);
            return;
        };

        let arrivals: Vec<(f64, f64)> = self
            .views
            .movements
            .iter()
            .map(|m| (days_since(origin, m.date), m.arrivals as f64))
            .collect();
        let departures: Vec<(f64, f64)> = self
            .views
            .movements
            .iter()
            .map(|m| (days_since(origin, m.date), m.departures as f64))
            .collect();
        let (x_bounds, y_bounds) = chart_bounds(&[&arrivals, &departures]);

        let widget = DailyPlottersChart {
            series: vec![
                ChartSeries {
                    points: &departures,
                    color: DEPARTURE_COLOR,
                },
                ChartSeries {
                    points: &arrivals,
                    color: ARRIVAL_COLOR,
                },
            ],
            origin,
            x_bounds,
            y_bounds,
            y_label: "Voos",
        };
        frame.render_widget(widget, inner);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = format!(
            "Tabela de Dados Filtrados ({}-{} of {})",
            (self.table_offset + 1).min(self.views.filtered.len()),
            (self.table_offset + area.height.saturating_sub(3) as usize).min(self.views.filtered.len()),
            self.views.filtered.len()
        );
        let header = Row::new(["Data", "Aeroporto", "Companhia", "Tipo", "Status", "Passageiros"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows = self.views.filtered.iter().skip(self.table_offset).map(|r| {
            Row::new(vec![
                Cell::from(r.date.format("%d/%m/%Y").to_string()),
                Cell::from(r.airport.label()),
                Cell::from(r.airline.label()),
                Cell::from(r.movement.label()),
                Cell::from(r.status.label()),
                Cell::from(r.passengers.to_string()),
            ])
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(11),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ change  Enter edit date  Del clear  c clear all  PgUp/PgDn table  e export CSV  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Step a wildcard-able slot through `Todos -> first -> ... -> last -> Todos`.
fn cycle_slot<T: Category>(current: Option<T>, delta: i32) -> Option<T> {
    let n = T::ALL.len() as i32 + 1;
    let pos = current
        .and_then(|c| T::ALL.iter().position(|x| *x == c))
        .map_or(0, |i| i as i32 + 1);
    let next = (pos + delta).rem_euclid(n);
    if next == 0 { None } else { Some(T::ALL[(next - 1) as usize]) }
}

fn shift_day(date: NaiveDate, delta: i32) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(i64::from(delta)))
        .unwrap_or(date)
}

fn days_since(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64
}

fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Draw a titled block and return the cleared inner area.
fn chart_frame(frame: &mut ratatui::Frame<'_>, area: Rect, title: &str) -> Option<Rect> {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    frame.render_widget(Clear, inner);
    Some(inner)
}

fn render_empty(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let msg = Paragraph::new("No flights match the current filters.")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default());
    frame.render_widget(msg, area);
}

/// Bounds covering every series, padded so lines don't sit on the axes.
fn chart_bounds(series: &[&[(f64, f64)]]) -> ([f64; 2], [f64; 2]) {
    let (mut x_max, mut y_max) = (0.0_f64, 0.0_f64);
    for s in series {
        for &(x, y) in s.iter() {
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }
    let x_bounds = [0.0, x_max.max(1.0)];
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };
    let y_bounds = [0.0, y_max * 1.05];
    (x_bounds, y_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airline, Airport, FlightStatus, Movement};

    #[test]
    fn cycle_slot_wraps_through_wildcard() {
        let mut slot: Option<Airport> = None;
        slot = cycle_slot(slot, 1);
        assert_eq!(slot, Some(Airport::X));
        slot = cycle_slot(slot, 1);
        slot = cycle_slot(slot, 1);
        assert_eq!(slot, Some(Airport::Z));
        assert_eq!(cycle_slot(slot, 1), None);
        assert_eq!(cycle_slot::<Movement>(None, -1), Some(Movement::Departure));
        assert_eq!(cycle_slot(Some(FlightStatus::Delayed), -1), None);
        assert_eq!(cycle_slot(Some(Airline::A), 1), Some(Airline::B));
    }

    #[test]
    fn chart_bounds_cover_all_series() {
        let a = [(0.0, 3.0), (10.0, 1.0)];
        let b = [(5.0, 4.0)];
        let (x, y) = chart_bounds(&[&a, &b]);
        assert_eq!(x, [0.0, 10.0]);
        assert!((y[1] - 4.2).abs() < 1e-9);
    }

    #[test]
    fn chart_bounds_never_collapse() {
        let single = [(0.0, 0.0)];
        let (x, y) = chart_bounds(&[&single]);
        assert!(x[1] > x[0]);
        assert!(y[1] > y[0]);
    }

    fn app(base: &[FlightRecord]) -> App<'_> {
        App::new(base, DashboardConfig::default()).unwrap()
    }

    #[test]
    fn arrow_keys_change_filter_and_rerender() {
        let base = crate::data::generate(42, 1000).unwrap();
        let mut app = app(&base);
        assert_eq!(app.views.filtered.len(), 1000);

        app.handle_key(KeyCode::Right).unwrap();
        assert_eq!(app.selection.airport, Some(Airport::X));
        assert!(app.views.filtered.iter().all(|r| r.airport == Airport::X));

        app.handle_key(KeyCode::Char('c')).unwrap();
        assert!(app.selection.is_empty());
        assert_eq!(app.views.filtered.len(), 1000);
    }

    #[test]
    fn inverted_date_edit_keeps_previous_range() {
        let base = crate::data::generate(42, 200).unwrap();
        let mut app = app(&base);
        let before = app.selection.date_range;

        // Move to "Início" and type a date after the end.
        for _ in 0..4 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();
        for c in "2025-06-01".chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.selection.date_range, before);
        assert!(app.status.contains("Invalid date range"));
    }

    #[test]
    fn date_edit_narrows_the_views() {
        let base = crate::data::generate(42, 1000).unwrap();
        let mut app = app(&base);
        for _ in 0..5 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();
        for c in "31/01/2024".chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        let jan_31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(app.selection.date_range.end(), Some(jan_31));
        assert!(app.views.movements.iter().all(|m| m.date <= jan_31));
    }

    #[test]
    fn export_key_writes_filtered_csv() {
        let dir = tempfile::tempdir().unwrap();
        let base = crate::data::generate(42, 300).unwrap();
        let config = DashboardConfig {
            export_path: dir.path().join("dados_voos.csv"),
            ..DashboardConfig::default()
        };
        let mut app = App::new(&base, config.clone()).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Char('e')).unwrap();

        let text = std::fs::read_to_string(&config.export_path).unwrap();
        assert_eq!(text.lines().count(), app.views.filtered.len() + 1);
        assert!(text.lines().skip(1).all(|l| l.contains(",Chegada,")));
    }
}
