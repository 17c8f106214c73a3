use crossterm::style::Color;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn title_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn section_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn label_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn highlight_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn message_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Extracts the 256-colour index from a crossterm colour, with a fallback
/// for colours outside the ANSI palette.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Foreground escape sequence for a palette colour.
pub fn fg(color: Color) -> String {
    format!("\x1b[38;5;{}m", get_ansi_code(color, 231))
}

/// Background escape sequence for a palette colour.
pub fn bg(color: Color) -> String {
    format!("\x1b[48;5;{}m", get_ansi_code(color, 21))
}

pub const RESET: &str = "\x1b[0m";
