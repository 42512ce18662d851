use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Padding, Widget},
};

use crate::ui::theme;

/// Rounded panel with an optional title. Children are drawn into
/// [`Card::inner`].
#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    title: Option<&'a str>,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    fn block(&self) -> Block<'a> {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::CARD_BORDER))
            .padding(Padding::horizontal(1));

        match self.title {
            Some(title) => block.title(Span::styled(format!(" {title} "), theme::heading())),
            None => block,
        }
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block().render(area, buf);
    }
}
