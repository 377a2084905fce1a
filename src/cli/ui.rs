use crate::core::{CategoryScore, Tone};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Styles text with the terminal color closest to a tone.
pub fn style_toned(text: &str, tone: Tone) -> String {
    let styled = match tone {
        Tone::Positive => style(text).green().bold(),
        Tone::Info => style(text).cyan().bold(),
        Tone::Caution => style(text).yellow().bold(),
        Tone::Critical => style(text).red().bold(),
    };
    styled.to_string()
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Info => Color::Cyan,
        Tone::Caution => Color::Yellow,
        Tone::Critical => Color::Red,
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn amount_cell(value: f64) -> Cell {
    Cell::new(format_amount(value)).set_alignment(CellAlignment::Right)
}

/// Formats a category score; unknown scores are displayed as "N/A".
pub fn category_score_cell(score: CategoryScore) -> Cell {
    match score {
        CategoryScore::Known(v) => {
            let color = if v >= 70.0 {
                Color::Green
            } else if v >= 40.0 {
                Color::Yellow
            } else {
                Color::Red
            };
            Cell::new(format!("{v:.0}/100"))
                .fg(color)
                .set_alignment(CellAlignment::Right)
        }
        CategoryScore::Unknown => Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
    }
}

/// Creates a cell for signed points with color coding.
pub fn points_cell(points: i32, max_points: i32) -> Cell {
    let text = format!("{points:+} / {max_points}");
    let color = if points > 0 { Color::Green } else { Color::Red };
    Cell::new(text).fg(color).set_alignment(CellAlignment::Right)
}

pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a ratio as a percentage, spelling out unbounded ratios.
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "∞ (no denominator)".to_string()
    } else {
        format!("{:.1}%", ratio * 100.0)
    }
}
