use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::{Icon, Size};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    variant: Variant,
    size: Size,
    icon: Option<Icon>,
    disabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: Variant::default(),
            size: Size::default(),
            icon: None,
            disabled: false,
            focused: false,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Presses only register on an enabled button.
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn style(&self) -> Style {
        let base = match self.variant {
            Variant::Primary => Style::default().bg(theme::ACCENT).fg(theme::BACKGROUND),
            Variant::Secondary => Style::default().bg(theme::GRAY).fg(theme::FOREGROUND),
            Variant::Outline => Style::default().fg(theme::ACCENT_LIGHT),
            Variant::Ghost => Style::default().fg(theme::MUTED),
        };
        let base = if self.focused {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base
        };
        if self.disabled {
            base.add_modifier(Modifier::DIM)
        } else {
            base
        }
    }

    fn padding(&self) -> usize {
        match self.size {
            Size::Sm => 1,
            Size::Md => 2,
            Size::Lg => 3,
        }
    }

    pub fn line(&self) -> Line<'a> {
        let pad = " ".repeat(self.padding());
        let mut spans = vec![Span::raw(pad.clone())];
        if let Some(icon) = self.icon {
            spans.push(icon.span());
        }
        spans.push(Span::raw(self.label));
        spans.push(Span::raw(pad));
        Line::from(spans).style(self.style())
    }

    /// Columns needed to draw the button, borders included.
    pub fn width(&self) -> u16 {
        let border = if self.variant == Variant::Outline { 2 } else { 0 };
        self.line().width() as u16 + border
    }

    pub fn height(&self) -> u16 {
        match (self.variant, self.size) {
            (Variant::Outline, _) => 3,
            (_, Size::Lg) => 3,
            _ => 1,
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = self.line();
        let style = self.style();
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(style);

        match (self.variant, self.size) {
            (Variant::Outline, _) => paragraph
                .block(Block::bordered().border_style(style))
                .render(area, buf),
            (_, Size::Lg) => paragraph
                .block(Block::new().padding(ratatui::widgets::Padding::vertical(1)))
                .render(area, buf),
            _ => paragraph.render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::primitives::IconName;
    use crate::ui::test_support::rendered;

    #[test]
    fn renders_label_and_icon() {
        let button = Button::new("Go").icon(Icon::new(IconName::ArrowRight));
        let area = Rect::new(0, 0, button.width(), button.height());
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(rendered(&buf), "  → Go  ");
    }

    #[test]
    fn icon_keeps_its_own_size() {
        let button = Button::new("Go").icon(Icon::new(IconName::ArrowRight).size(Size::Sm));
        let area = Rect::new(0, 0, button.width(), button.height());
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        assert_eq!(rendered(&buf), "  →Go  ");
    }

    #[test]
    fn outline_variant_draws_border() {
        let button = Button::new("Back to Home").variant(Variant::Outline);
        assert_eq!(button.height(), 3);

        let area = Rect::new(0, 0, button.width(), button.height());
        let mut buf = Buffer::empty(area);
        button.render(area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("Back to Home"));
        assert!(text.starts_with('┌'));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let button = Button::new("Place").disabled(true);
        assert!(!button.is_enabled());
        assert!(button.style().add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn size_changes_padding() {
        assert_eq!(Button::new("x").size(Size::Sm).width(), 3);
        assert_eq!(Button::new("x").size(Size::Lg).width(), 7);
        assert_eq!(Button::new("x").size(Size::Lg).height(), 3);
    }
}
