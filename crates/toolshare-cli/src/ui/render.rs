use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use toolshare_core::{category_colour, Colour, KvStore, Mode, DEFAULT_COLOUR};

use super::app::{App, Field};
use super::input::Input;

pub(super) const ACCENT: Color = Color::Rgb(0, 123, 255);

const NAME_W: usize = 24;
const OWNER_W: usize = 36;

pub(super) fn render<S: KvStore>(app: &App<S>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    let (title, lines, scroll) = match app.state.mode() {
        Mode::Unidentified => (" Wie ben je? ", identify_lines(app), 0),
        Mode::Menu => (" ToolShare Club ", menu_lines(app), 0),
        Mode::Adding => (" ➕ Gereedschap toevoegen ", adding_lines(app), 0),
        Mode::Borrowing => {
            let (lines, selected_line) = borrow_lines(app);
            let view_h = chunks[0].height.saturating_sub(2) as usize;
            let scroll = selected_line.saturating_sub(view_h.saturating_sub(2));
            (" 🔄 Gereedschap lenen ", lines, scroll as u16)
        }
    };

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(Span::styled(
                    title,
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
        )
        .scroll((scroll, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[0]);

    render_hints(app.state.mode(), frame, chunks[1]);
}

fn render_hints(mode: Mode, frame: &mut Frame, area: Rect) {
    let hint = match mode {
        Mode::Unidentified => "tab  wissel veld   enter  bevestig   esc  stoppen",
        Mode::Menu => "1  toevoegen   2  lenen   q  stoppen",
        Mode::Adding => "↑/↓  categorie   enter  toevoegen   esc  terug",
        Mode::Borrowing => "↑/↓  kies   enter  lenen   esc  terug",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

// ── screens ──────────────────────────────────────────────────────────────────

fn identify_lines<S: KvStore>(app: &App<S>) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        input_line("  Naam    ", &app.name, app.focus == Field::Name),
        Line::raw(""),
        input_line("  E-mail  ", &app.email, app.focus == Field::Email),
    ]
}

fn menu_lines<S: KvStore>(app: &App<S>) -> Vec<Line<'static>> {
    let name = app
        .state
        .user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  Welkom, {name}!"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("  Wat wil je doen?"),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" 1 ", Style::default().fg(Color::Black).bg(ACCENT)),
            Span::raw("  ➕ Gereedschap toevoegen"),
        ]),
        Line::from(vec![
            Span::styled(" 2 ", Style::default().fg(Color::Black).bg(ACCENT)),
            Span::raw("  🔄 Iets lenen"),
        ]),
    ]
}

fn adding_lines<S: KvStore>(app: &App<S>) -> Vec<Line<'static>> {
    let (label, style) = match app.selected_category() {
        Some(c) => (
            c.label().to_string(),
            Style::default().fg(terminal_colour(category_colour(&c))),
        ),
        None => ("Categorie".to_string(), Style::default().fg(Color::DarkGray)),
    };
    vec![
        Line::raw(""),
        input_line("  Naam gereedschap  ", &app.tool_name, true),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Categorie         ", Style::default().fg(Color::DarkGray)),
            Span::raw("◂ "),
            Span::styled(label, style.add_modifier(Modifier::BOLD)),
            Span::raw(" ▸"),
        ]),
    ]
}

/// Lines for the grouped borrow view, plus the line index of the
/// highlighted row so the caller can keep it in view.
fn borrow_lines<S: KvStore>(app: &App<S>) -> (Vec<Line<'static>>, usize) {
    let projection = app.state.projection();
    let mut lines = vec![Line::raw("")];
    if projection.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Er is nog geen gereedschap beschikbaar.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        return (lines, 0);
    }

    let mut row = 0usize;
    let mut selected_line = 0usize;
    for group in projection.groups() {
        lines.push(Line::from(Span::styled(
            format!("  {}", group.category),
            Style::default()
                .fg(terminal_colour(group.colour))
                .add_modifier(Modifier::BOLD),
        )));
        for tool in &group.tools {
            let selected = row == app.selected;
            if selected {
                selected_line = lines.len();
            }
            let marker = if selected { "▶ " } else { "  " };
            let base = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let status = match &tool.borrowed_by {
                Some(by) => Span::styled(
                    format!("Geleend door: {by}"),
                    Style::default().fg(Color::Red),
                ),
                None => Span::styled(
                    "[ Lenen ]",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{}{:<width$}", marker, tool.name, width = NAME_W),
                    base,
                ),
                Span::raw(format!(
                    "{:<width$}",
                    format!("{} ({})", tool.owner, tool.owner_email),
                    width = OWNER_W
                )),
                status,
            ]));
            row += 1;
        }
        lines.push(Line::raw(""));
    }
    (lines, selected_line)
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn input_line(label: &'static str, input: &Input, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::styled(label, label_style)];
    if focused {
        let (before, cur, after) = input.split_at_cursor();
        spans.push(Span::styled(before.to_string(), Style::default().fg(Color::White)));
        spans.push(Span::styled(
            cur,
            Style::default().fg(Color::Black).bg(Color::White),
        ));
        spans.push(Span::styled(after.to_string(), Style::default().fg(Color::White)));
    } else {
        spans.push(Span::raw(input.as_str().to_string()));
    }
    Line::from(spans)
}

/// The default heading colour is black, which vanishes on dark terminals;
/// use the terminal's own foreground for it instead.
fn terminal_colour(colour: Colour) -> Color {
    if colour == DEFAULT_COLOUR {
        Color::Reset
    } else {
        Color::Rgb(colour.r, colour.g, colour.b)
    }
}
