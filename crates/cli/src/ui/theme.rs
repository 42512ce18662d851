use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0x00, 0x52, 0xff);
pub const ACCENT_LIGHT: Color = Color::Rgb(0x5c, 0x8d, 0xff);
pub const BACKGROUND: Color = Color::Rgb(0x0b, 0x0d, 0x12);
pub const FOREGROUND: Color = Color::Rgb(0xe8, 0xea, 0xf0);
pub const MUTED: Color = Color::Rgb(0x9a, 0xa0, 0xae);
pub const GRAY: Color = Color::Rgb(0x2a, 0x2e, 0x38);
pub const CARD_BORDER: Color = Color::Rgb(0x3a, 0x3f, 0x4b);
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::LightRed;
pub const SUCCESS: Color = Color::LightGreen;

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn heading() -> Style {
    Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
}

pub fn focused() -> Style {
    Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD)
}
