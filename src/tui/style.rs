//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// SoC trace line color.
pub const SOC_COLOR: Color = Color::Blue;
/// Terminal voltage line color.
pub const TERMINAL_COLOR: Color = Color::Red;
/// OCV reference line color.
pub const OCV_COLOR: Color = Color::DarkGray;
/// Applied current line color.
pub const CURRENT_COLOR: Color = Color::Green;
/// SoC gauge color when high (>= 50%).
pub const SOC_HIGH: Color = Color::Green;
/// SoC gauge color when medium (>= 20%).
pub const SOC_MID: Color = Color::Yellow;
/// SoC gauge color when low (< 20%).
pub const SOC_LOW: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns a gauge color based on the state of charge in percent.
pub fn soc_color(soc_percent: f64) -> Color {
    if soc_percent >= 50.0 {
        SOC_HIGH
    } else if soc_percent >= 20.0 {
        SOC_MID
    } else {
        SOC_LOW
    }
}

/// Computes Y-axis bounds from chart data points with 10% padding.
pub fn auto_bounds_y(data: &[(f64, f64)]) -> [f64; 2] {
    let ys = data.iter().map(|&(_, y)| y);
    let min = ys.clone().fold(f64::INFINITY, f64::min);
    let max = ys.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [-1.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [min - pad, max + pad]
}
