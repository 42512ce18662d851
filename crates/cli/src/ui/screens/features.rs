use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::{
    primitives::{Button, Card, Icon, IconName, Variant},
    router::Tab,
    theme,
};

pub const FEATURES: [&str; 4] = [
    "Minimalistic and beautiful UI design",
    "Responsive layout for all devices",
    "Dark mode support",
    "OnchainKit integration",
];

/// Static list of what the app offers, with a way back home.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturesScreen;

impl FeaturesScreen {
    /// The back button is the only control; Enter or Space presses it.
    pub fn handle_key(&self, key: &KeyEvent) -> Option<Tab> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Backspace => Some(Tab::Home),
            _ => None,
        }
    }
}

impl Widget for FeaturesScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let back = Button::new("Back to Home")
            .variant(Variant::Outline)
            .focused(true);
        let [card_area, button_area] = Layout::vertical([
            Constraint::Length(FEATURES.len() as u16 + 4),
            Constraint::Length(back.height()),
        ])
        .areas(area);

        let card = Card::new().title("Key Features");
        let inner = card.inner(card_area);
        card.render(card_area, buf);

        let check = Icon::new(IconName::Check).style(Style::default().fg(theme::SUCCESS));
        let mut lines = vec![Line::from(Span::styled(
            "A terminal front end for placing Uniswap v4 limit orders.",
            theme::muted(),
        ))];
        lines.push(Line::default());
        lines.extend(
            FEATURES
                .iter()
                .map(|feature| Line::from(vec![check.span(), Span::raw(*feature)])),
        );
        Paragraph::new(lines).render(inner, buf);

        let [button_area, _] =
            Layout::horizontal([Constraint::Length(back.width()), Constraint::Fill(1)])
                .areas(button_area);
        back.render(button_area, buf);
    }
}
