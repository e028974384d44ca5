use std::f64::consts::TAU;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Axis, Block, Borders, Chart, Clear, Dataset, GraphType, List, ListItem, Paragraph,
    },
    Frame,
};

use crate::cli::state::{App, Focus, SpendingSnapshot, ViewState};
use crate::cli::util::{self, fmt_inr};

pub const DAILY_TITLE: &str = "Daily Spending Trend";
pub const MONTHLY_TITLE: &str = "Monthly Spending Trend";
pub const CATEGORY_TITLE: &str = "Spending by Category";

// donut radii, outer:inner = 80:60
const OUTER_RADIUS: f64 = 0.95;
const INNER_RADIUS: f64 = OUTER_RADIUS * 60.0 / 80.0;

const TOOLTIP_WIDTH: u16 = 26;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    match &app.view {
        ViewState::Loading => {
            f.render_widget(Paragraph::new("Loading...").alignment(Alignment::Center), size);
        }
        ViewState::Error(msg) => {
            let p = Paragraph::new(format!("Error: {msg}")).style(Style::default().fg(Color::Red));
            f.render_widget(p, size);
        }
        ViewState::Ready => match &app.snapshot {
            Some(snapshot) => draw_dashboard(f, size, app, snapshot),
            None => {
                let p = Paragraph::new("Error: No data available").style(Style::default().fg(Color::Red));
                f.render_widget(p, size);
            }
        },
    }

    if app.show_help {
        let area = center_rect(size, 52, 12);
        f.render_widget(Clear, area);
        draw_help(f, area);
    }
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App, snapshot: &SpendingSnapshot) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(1)])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(root[0]);

    draw_daily(f, panels[0], app, snapshot);
    draw_monthly(f, panels[1], app, snapshot);
    draw_categories(f, panels[2], app, snapshot);
    draw_status(f, root[1], app);
}

/// Bordered panel; returns (chart area, tooltip area).
fn panel(f: &mut Frame, area: Rect, title: &str, focused: bool) -> (Rect, Rect) {
    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(TOOLTIP_WIDTH)])
        .split(inner);
    (cols[0], cols[1])
}

fn draw_tooltip(f: &mut Frame, area: Rect, app: &App, focus: Focus) {
    let text = match app.tooltip(focus) {
        Some((label, amount)) => {
            let [head, amount_line] = util::tooltip_lines(&label, amount);
            vec![
                Line::from(Span::styled(head, Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(amount_line, Style::default().fg(Color::Rgb(0x05, 0x96, 0x69)))),
            ]
        }
        None => vec![Line::from("no data")],
    };
    let p = Paragraph::new(text).block(Block::default().borders(Borders::LEFT));
    f.render_widget(p, area);
}

fn y_axis(values: &[f64]) -> Axis<'static> {
    let [lo, hi] = util::axis_bounds(values);
    Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([lo, hi])
        .labels(vec![
            util::fmt_inr_axis(lo),
            util::fmt_inr_axis((lo + hi) / 2.0),
            util::fmt_inr_axis(hi),
        ])
}

fn x_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => vec![],
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![labels[0].clone(), labels[n / 2].clone(), labels[n - 1].clone()],
    }
}

fn x_bounds(n: usize) -> [f64; 2] {
    [0.0, n.saturating_sub(1).max(1) as f64]
}

fn cursor_point(points: &[(f64, f64)], cursor: usize) -> Vec<(f64, f64)> {
    points.get(cursor).copied().into_iter().collect()
}

fn draw_daily(f: &mut Frame, area: Rect, app: &App, snapshot: &SpendingSnapshot) {
    let focused = app.focus == Focus::Daily;
    let (chart_area, tip_area) = panel(f, area, DAILY_TITLE, focused);

    let series = snapshot.spending_over_time.points();
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, util::to_f64(p.amount)))
        .collect();
    let ticks: Vec<String> = series.iter().map(|p| util::fmt_date_tick(&p.date)).collect();
    let values: Vec<f64> = points.iter().map(|p| p.1).collect();
    let marker = cursor_point(&points, app.cursor(Focus::Daily));

    let mut datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(util::LINE_COLOR))
        .data(&points)];
    if focused {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .data(&marker),
        );
    }

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds(points.len()))
                .labels(x_labels(&ticks)),
        )
        .y_axis(y_axis(&values));
    f.render_widget(chart, chart_area);
    draw_tooltip(f, tip_area, app, Focus::Daily);
}

fn draw_monthly(f: &mut Frame, area: Rect, app: &App, snapshot: &SpendingSnapshot) {
    let focused = app.focus == Focus::Monthly;
    let (chart_area, tip_area) = panel(f, area, MONTHLY_TITLE, focused);

    let series = snapshot.monthly_trend.points();
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, util::to_f64(p.amount)))
        .collect();
    let months: Vec<String> = series.iter().map(|p| p.month.clone()).collect();
    let values: Vec<f64> = points.iter().map(|p| p.1).collect();

    // one bar per braille column between neighbouring months
    let gaps = points.len().saturating_sub(1).max(1);
    let steps = (chart_area.width as usize * 2 / gaps).max(1);
    let fill = util::area_fill(&points, steps);
    let marker = cursor_point(&points, app.cursor(Focus::Monthly));

    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(util::AREA_COLOR).add_modifier(Modifier::DIM))
            .data(&fill),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(util::AREA_COLOR))
            .data(&points),
    ];
    if focused {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                .data(&marker),
        );
    }

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds(points.len()))
                .labels(x_labels(&months)),
        )
        .y_axis(y_axis(&values));
    f.render_widget(chart, chart_area);
    draw_tooltip(f, tip_area, app, Focus::Monthly);
}

fn draw_categories(f: &mut Frame, area: Rect, app: &App, snapshot: &SpendingSnapshot) {
    let focused = app.focus == Focus::Category;
    let (left, legend_area) = panel(f, area, CATEGORY_TITLE, focused);

    let slices = snapshot.category_distribution.points();
    let values: Vec<f64> = slices.iter().map(|c| util::to_f64(c.value)).collect();

    let (aspect, wedges) = donut_points(&values, left.width, left.height);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-aspect, aspect])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (i, coords) in wedges.iter().enumerate() {
                if !coords.is_empty() {
                    ctx.draw(&Points { coords, color: util::slice_color(i) });
                }
            }
        });
    f.render_widget(canvas, left);

    let cursor = app.cursor(Focus::Category);
    let items: Vec<ListItem> = slices
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let label = Span::raw(format!("{}: {}", c.category, fmt_inr(c.value.0)));
            let line = Line::from(vec![
                Span::styled("■ ", Style::default().fg(util::slice_color(i))),
                if focused && i == cursor {
                    label.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    label
                },
            ]);
            ListItem::new(line)
        })
        .collect();
    let legend = List::new(items).block(Block::default().borders(Borders::LEFT));
    f.render_widget(legend, legend_area);
}

/// Braille sample points of each donut wedge on a canvas of `cols` x `rows`
/// cells. Returns the half-width of the x bounds that keeps the ring round.
pub fn donut_points(values: &[f64], cols: u16, rows: u16) -> (f64, Vec<Vec<(f64, f64)>>) {
    let cols = cols.max(1) as usize;
    let rows = rows.max(1) as usize;
    // a cell is about twice as tall as it is wide
    let aspect = cols as f64 / (2.0 * rows as f64);

    let spans = util::slice_spans(values);
    let mut wedges = vec![Vec::new(); values.len()];
    if spans.is_empty() {
        return (aspect, wedges);
    }

    let (px, py) = (cols * 2, rows * 4);
    let dx = 2.0 * aspect / px as f64;
    let dy = 2.0 / py as f64;
    for yi in 0..py {
        let y = -1.0 + (yi as f64 + 0.5) * dy;
        for xi in 0..px {
            let x = -aspect + (xi as f64 + 0.5) * dx;
            let r = (x * x + y * y).sqrt();
            if !(INNER_RADIUS..=OUTER_RADIUS).contains(&r) {
                continue;
            }
            let turn = y.atan2(x).rem_euclid(TAU) / TAU;
            if let Some(i) = spans.iter().position(|&(s, e)| turn >= s && turn < e) {
                wedges[i].push((x, y));
            }
        }
    }
    (aspect, wedges)
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let updated = app
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".into());
    let line = Line::from(vec![
        Span::styled(format!(" Updated {updated} "), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("| Tab: focus  ←/→: inspect  r: refresh  ?: help  q: quit | "),
        Span::styled(app.endpoint.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help_text = [
        "Keys:",
        "  q / Esc    : Quit",
        "  r          : Refresh now",
        "  Tab / ↓    : Focus next chart",
        "  S-Tab / ↑  : Focus previous chart",
        "  ← / →      : Move cursor in focused chart",
        "  ?          : Toggle this help",
        "",
        "Data refreshes on its own every poll interval.",
    ]
    .join("\n");

    let p = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help & Keybindings"));
    f.render_widget(p, area);
}

/// Plain-text rendition of a snapshot, used by `--once`.
pub fn render_text(snapshot: &SpendingSnapshot) -> String {
    let mut out = Vec::new();

    out.push(DAILY_TITLE.to_string());
    for p in snapshot.spending_over_time.points() {
        out.push(format!("  {:<12} {}", util::fmt_date_tick(&p.date), fmt_inr(p.amount.0)));
    }

    out.push(MONTHLY_TITLE.to_string());
    for p in snapshot.monthly_trend.points() {
        out.push(format!("  {:<12} {}", p.month, fmt_inr(p.amount.0)));
    }

    out.push(CATEGORY_TITLE.to_string());
    for c in snapshot.category_distribution.points() {
        out.push(format!("  {}: {}", c.category, fmt_inr(c.value.0)));
    }

    out.join("\n")
}

fn center_rect(rect: Rect, w: u16, h: u16) -> Rect {
    let x = rect.x + rect.width.saturating_sub(w) / 2;
    let y = rect.y + rect.height.saturating_sub(h) / 2;
    Rect { x, y, width: w.min(rect.width), height: h.min(rect.height) }
}
