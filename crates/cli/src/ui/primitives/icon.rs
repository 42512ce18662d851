use std::str::FromStr;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Widget,
};

use super::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Heart,
    Star,
    Check,
    Plus,
    ArrowRight,
}

impl IconName {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Heart => "♥",
            Self::Star => "★",
            Self::Check => "✓",
            Self::Plus => "+",
            Self::ArrowRight => "→",
        }
    }
}

impl FromStr for IconName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" => Ok(Self::Heart),
            "star" => Ok(Self::Star),
            "check" => Ok(Self::Check),
            "plus" => Ok(Self::Plus),
            "arrow-right" => Ok(Self::ArrowRight),
            other => Err(format!("unknown icon {other:?}")),
        }
    }
}

/// A single glyph padded to the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    name: IconName,
    size: Size,
    style: Style,
}

impl Icon {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: Size::default(),
            style: Style::default(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> String {
        let glyph = self.name.glyph();
        match self.size {
            Size::Sm => glyph.to_string(),
            Size::Md => format!("{glyph} "),
            Size::Lg => format!(" {glyph} "),
        }
    }

    pub fn span(&self) -> Span<'static> {
        let style = match self.size {
            Size::Lg => self.style.add_modifier(Modifier::BOLD),
            Size::Sm | Size::Md => self.style,
        };
        Span::styled(self.text(), style)
    }
}

impl Widget for Icon {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.span().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("arrow-right".parse::<IconName>(), Ok(IconName::ArrowRight));
        assert_eq!("check".parse::<IconName>(), Ok(IconName::Check));
        assert!("gear".parse::<IconName>().is_err());
    }

    #[test]
    fn size_pads_glyph() {
        let icon = Icon::new(IconName::Check);
        assert_eq!(icon.size(Size::Sm).text(), "✓");
        assert_eq!(icon.size(Size::Md).text(), "✓ ");
        assert_eq!(icon.size(Size::Lg).text(), " ✓ ");
    }

    #[test]
    fn renders_into_buffer() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        Icon::new(IconName::Star).size(Size::Lg).render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "★");
    }
}
