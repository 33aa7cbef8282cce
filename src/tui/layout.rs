//! TUI layout and widget rendering: the three-panel trace view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(6),    // SoC chart
            Constraint::Min(6),    // voltage chart
            Constraint::Min(6),    // current chart
            Constraint::Length(3), // SoC gauge
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_soc_chart(frame, app, chunks[1]);
    render_voltage_chart(frame, app, chunks[2]);
    render_current_chart(frame, app, chunks[3]);
    render_soc_gauge(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Header bar: preset name, playback progress, speed, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_label = if app.is_finished() {
        "DONE"
    } else if app.paused {
        "PAUSED"
    } else {
        "PLAYING"
    };

    let state_icon = if app.is_finished() {
        "■"
    } else if app.paused {
        "‖"
    } else {
        "▶"
    };

    let header = Line::from(vec![
        Span::styled(
            " CELL-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ sample {}/{} │ {}ms │ {} {} ",
            app.cursor,
            app.trace.len(),
            app.tick_interval_ms(),
            state_icon,
            state_label,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Shared x-axis over the full simulated duration.
fn time_axis(app: &App) -> Axis<'static> {
    let hi = app.duration_hours();
    Axis::default()
        .title("hours")
        .bounds([0.0, hi])
        .labels(vec!["0".to_string(), format!("{hi:.1}")])
}

/// State-of-charge panel with the fixed 0–100 axis.
fn render_soc_chart(frame: &mut Frame, app: &App, area: Rect) {
    let soc_data: Vec<(f64, f64)> = app
        .visible()
        .iter()
        .map(|s| (s.time_hours, s.soc_percent))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("SoC")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::SOC_COLOR))
            .data(&soc_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" State of Charge ")
                .borders(Borders::ALL),
        )
        .x_axis(time_axis(app))
        .y_axis(
            Axis::default()
                .title("%")
                .bounds([0.0, 100.0])
                .labels(vec!["0".to_string(), "100".to_string()]),
        );

    frame.render_widget(chart, area);
}

/// Voltage panel: terminal voltage and OCV, fixed ocv_min−0.1..ocv_max+0.1.
fn render_voltage_chart(frame: &mut Frame, app: &App, area: Rect) {
    let terminal_data: Vec<(f64, f64)> = app
        .visible()
        .iter()
        .map(|s| (s.time_hours, s.terminal_volts))
        .collect();

    let ocv_data: Vec<(f64, f64)> = app
        .visible()
        .iter()
        .map(|s| (s.time_hours, s.ocv_volts))
        .collect();

    let (ocv_min, ocv_max) = app.ocv_bounds();
    let y_lo = ocv_min - 0.1;
    let y_hi = ocv_max + 0.1;

    let datasets = vec![
        Dataset::default()
            .name("Terminal")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::TERMINAL_COLOR))
            .data(&terminal_data),
        Dataset::default()
            .name("OCV")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::OCV_COLOR))
            .data(&ocv_data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Voltage ").borders(Borders::ALL))
        .x_axis(time_axis(app))
        .y_axis(
            Axis::default()
                .title("V")
                .bounds([y_lo, y_hi])
                .labels(vec![format!("{y_lo:.1}"), format!("{y_hi:.1}")]),
        );

    frame.render_widget(chart, area);
}

/// Applied-current panel with auto-scaled bounds.
fn render_current_chart(frame: &mut Frame, app: &App, area: Rect) {
    let current_data: Vec<(f64, f64)> = app
        .visible()
        .iter()
        .map(|s| (s.time_hours, s.current_amps))
        .collect();

    let y_bounds = style::auto_bounds_y(&current_data);

    let datasets = vec![
        Dataset::default()
            .name("Current")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::CURRENT_COLOR))
            .data(&current_data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Applied Current ")
                .borders(Borders::ALL),
        )
        .x_axis(time_axis(app))
        .y_axis(
            Axis::default()
                .title("A")
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.1}", y_bounds[0]),
                    format!("{:.1}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// SoC gauge plus the latest sample readout.
fn render_soc_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let soc = app.soc_percent();
    let color = style::soc_color(soc);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().title(" SoC ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio((soc / 100.0).clamp(0.0, 1.0))
        .label(format!("{soc:.1}%"));
    frame.render_widget(gauge, chunks[0]);

    let readout = if let Some(s) = app.last_sample() {
        format!(" I={:.2}A  Vterm={:.3}V ", s.current_amps, s.terminal_volts)
    } else {
        " Waiting for first sample... ".to_string()
    };
    let widget = Paragraph::new(Line::from(readout))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, chunks[1]);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Space:Pause  +/-:Speed  1/2/3:Preset  r:Restart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
