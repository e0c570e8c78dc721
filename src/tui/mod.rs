//! Ratatui-based terminal form.
//!
//! The TUI renders the five model fields as a form with per-field error
//! lines, a result line, and a risk-curve panel showing where the current
//! assessment sits on the logistic curve.

use std::io;
use std::time::Duration;

use chrono::{Datelike, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::{self, RunOutput};
use crate::domain::{FieldId, FieldKind, RawInput};
use crate::error::AppError;
use crate::math::logistic;
use crate::validate;

mod plotters_chart;

use plotters_chart::RiskCurveChart;

/// First year the calculator shipped (footer range start).
const COPYRIGHT_START_YEAR: i32 = 2025;

/// Linear-predictor range rendered by the risk-curve panel.
const CURVE_Z_MIN: f64 = -8.0;
const CURVE_Z_MAX: f64 = 8.0;
const CURVE_SAMPLES: usize = 161;

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::environment(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::environment(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::environment(format!(
                "Failed to enter alternate screen: {e}"
            )));
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

struct App {
    raw: RawInput,
    selected_field: usize,
    run: Option<RunOutput>,
    status: String,
}

impl App {
    fn new() -> Self {
        Self {
            raw: RawInput::default(),
            selected_field: 0,
            run: None,
            status: "Fill in the form and press Enter to compute.".to_string(),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::environment(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::environment(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::environment(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
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

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FieldId::ALL.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Enter => self.compute(),
            KeyCode::Char('x') => self.clear_form(),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.cycle_selection(-1),
            KeyCode::Right | KeyCode::Char(' ') => self.cycle_selection(1),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
        false
    }

    fn selected_id(&self) -> FieldId {
        FieldId::ALL[self.selected_field]
    }

    /// Append a keystroke to the selected numeric field, keeping the text
    /// shaped as a decimal number (digits, at most one separator).
    fn insert_char(&mut self, c: char) {
        let id = self.selected_id();
        let FieldKind::Numeric { .. } = id.spec().kind else {
            return;
        };
        if !matches!(c, '0'..='9' | '.' | ',') {
            return;
        }

        let field = self.raw.get_mut(id);
        field.push(c);
        *field = validate::shape_numeric_input(field);
        self.clear_field_error(id);
    }

    fn delete_char(&mut self) {
        let id = self.selected_id();
        let FieldKind::Numeric { .. } = id.spec().kind else {
            return;
        };
        self.raw.get_mut(id).pop();
        self.clear_field_error(id);
    }

    /// Cycle a binary selection: unset -> no -> yes -> unset.
    fn cycle_selection(&mut self, delta: i32) {
        let id = self.selected_id();
        if id.spec().kind != FieldKind::Binary {
            return;
        }

        let next = if delta >= 0 {
            match self.raw.get(id) {
                "" => "0",
                "0" => "1",
                _ => "",
            }
        } else {
            match self.raw.get(id) {
                "" => "1",
                "1" => "0",
                _ => "",
            }
        };
        *self.raw.get_mut(id) = next.to_string();
        self.clear_field_error(id);
    }

    /// Editing a field drops its stale error; other fields keep theirs until
    /// the next compute.
    fn clear_field_error(&mut self, id: FieldId) {
        if let Some(run) = &mut self.run {
            run.errors.clear(id);
        }
    }

    fn compute(&mut self) {
        let run = pipeline::evaluate(&self.raw);
        self.status = if run.assessment.is_some() {
            "Computed.".to_string()
        } else {
            "Some fields need attention.".to_string()
        };
        self.run = Some(run);
    }

    /// Reset fields, errors, and the result.
    fn clear_form(&mut self) {
        self.raw.clear();
        self.run = None;
        self.selected_field = 0;
        self.status = "Form cleared.".to_string();
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_result(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("cvr", Style::default().fg(Color::Cyan)),
            Span::raw(" — cardiovascular hospitalization risk (12 months)"),
        ]));

        let summary = match self.run.as_ref().and_then(|r| r.assessment.as_ref()) {
            Some(a) => format!(
                "z = {:.3} | p = {}",
                a.linear_predictor,
                crate::report::format_percent(a.probability)
            ),
            None => "no result yet".to_string(),
        };
        lines.push(Line::from(Span::styled(
            summary,
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_form(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Risk curve").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let curve = curve_series();
        let marker: Vec<(f64, f64)> = self
            .run
            .as_ref()
            .and_then(|r| r.assessment.as_ref())
            .map(|a| {
                let z = a.linear_predictor.clamp(CURVE_Z_MIN, CURVE_Z_MAX);
                vec![(z, a.probability)]
            })
            .unwrap_or_default();

        let widget = RiskCurveChart {
            curve: &curve,
            marker: &marker,
            x_bounds: [CURVE_Z_MIN, CURVE_Z_MAX],
            y_bounds: [0.0, 1.0],
            x_label: "linear predictor z",
            y_label: "probability",
            fmt_x: fmt_axis_z,
            fmt_y: fmt_axis_p,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let errors = self.run.as_ref().map(|r| &r.errors);

        let items: Vec<ListItem> = FieldId::ALL
            .into_iter()
            .map(|id| {
                let mut lines = vec![Line::from(field_row(id, &self.raw))];
                if let Some(message) = errors.and_then(|e| e.get(id)) {
                    lines.push(Line::from(Span::styled(
                        format!("  {message}"),
                        Style::default().fg(Color::Red),
                    )));
                }
                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Inputs").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = match self.run.as_ref() {
            Some(run) => match run.assessment.as_ref() {
                Some(a) => Line::from(Span::styled(
                    crate::report::format_result(a),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                None => Line::from(Span::styled(
                    "Resolve the highlighted fields and press Enter again.",
                    Style::default().fg(Color::Yellow),
                )),
            },
            None => Line::from(Span::styled(
                "Press Enter to compute.",
                Style::default().fg(Color::Gray),
            )),
        };

        let p = Paragraph::new(line).block(Block::default().title("Result").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        // The clear action only appears once something has been entered.
        let help = if self.raw.is_all_empty() {
            "↑/↓ select  type to edit  ←/→ toggle  Enter compute  q quit"
        } else {
            "↑/↓ select  type to edit  ←/→ toggle  Enter compute  x clear  q quit"
        };

        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled(copyright_line(), Style::default().fg(Color::DarkGray)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// One form row: label, range hint, current value.
fn field_row(id: FieldId, raw: &RawInput) -> String {
    let spec = id.spec();
    let value = match spec.kind {
        FieldKind::Numeric { .. } => {
            let text = raw.get(id);
            if text.is_empty() { "·" } else { text }.to_string()
        }
        FieldKind::Binary => match raw.get(id) {
            "1" => "yes".to_string(),
            "0" => "no".to_string(),
            _ => "-".to_string(),
        },
    };

    match spec.range_label() {
        Some(range) => format!("{} ({range}): {value}", id.label()),
        None => format!("{}: {value}", id.label()),
    }
}

/// Sample the logistic curve across the rendered z range.
fn curve_series() -> Vec<(f64, f64)> {
    (0..CURVE_SAMPLES)
        .map(|i| {
            let u = i as f64 / (CURVE_SAMPLES as f64 - 1.0);
            let z = CURVE_Z_MIN + u * (CURVE_Z_MAX - CURVE_Z_MIN);
            (z, logistic(z))
        })
        .collect()
}

fn copyright_line() -> String {
    format!("© {COPYRIGHT_START_YEAR} - {}", Local::now().year())
}

fn fmt_axis_z(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_p(v: f64) -> String {
    format!("{:.0}%", v * 100.0)
}
