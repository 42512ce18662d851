use alloy::primitives::B256;
use hookah_core::{CONNECT_PROMPT, FormState, SubmitView};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::{
    primitives::{Button, Card, Icon, IconName},
    theme,
};

/// Focusable controls of the order form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Tick,
    Amount,
    Token,
    Submit,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Tick, Field::Amount, Field::Token, Field::Submit];

    pub fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, Field::Tick | Field::Amount)
    }
}

/// Lifecycle of the last submission as shown under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TxStatus {
    #[default]
    Idle,
    Pending,
    Confirmed(B256),
    Failed(String),
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, TxStatus::Pending)
    }

    fn line(&self) -> Option<Line<'static>> {
        let line = match self {
            TxStatus::Idle => return None,
            TxStatus::Pending => Line::styled(
                "Waiting for confirmation...",
                Style::default().fg(theme::WARNING),
            ),
            TxStatus::Confirmed(hash) => Line::from(vec![
                Icon::new(IconName::Check)
                    .style(Style::default().fg(theme::SUCCESS))
                    .span(),
                Span::styled(format!("Confirmed {hash}"), Style::default().fg(theme::SUCCESS)),
            ]),
            TxStatus::Failed(reason) => Line::styled(
                format!("Failed: {reason}"),
                Style::default().fg(theme::ERROR),
            ),
        };
        Some(line)
    }
}

/// The limit-order form: two text inputs, a token selector, the submit area
/// and an order summary.
pub struct HomeScreen<'a> {
    form: &'a FormState,
    tokens: [&'a str; 2],
    view: &'a SubmitView,
    focus: Field,
    status: &'a TxStatus,
}

impl<'a> HomeScreen<'a> {
    pub fn new(
        form: &'a FormState,
        tokens: [&'a str; 2],
        view: &'a SubmitView,
        status: &'a TxStatus,
    ) -> Self {
        Self {
            form,
            tokens,
            view,
            focus: Field::default(),
            status,
        }
    }

    pub fn focus(mut self, focus: Field) -> Self {
        self.focus = focus;
        self
    }

    fn label(&self, text: &'static str, field: Field) -> Line<'static> {
        let style = if self.focus == field {
            theme::focused()
        } else {
            theme::heading()
        };
        Line::styled(text, style)
    }

    fn input(&self, value: &str, field: Field) -> Line<'static> {
        let focused = self.focus == field;
        let mut spans = vec![Span::styled("> ", theme::muted())];
        if value.is_empty() && !focused {
            spans.push(Span::styled("0", theme::muted()));
        } else {
            spans.push(Span::raw(value.to_string()));
        }
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme::ACCENT_LIGHT)));
        }
        Line::from(spans)
    }

    fn selector(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.tokens.len() * 2);
        for symbol in self.tokens {
            let selected = symbol == self.form.selected_token;
            let style = match (selected, self.focus == Field::Token) {
                (true, true) => Style::default()
                    .bg(theme::ACCENT)
                    .fg(theme::BACKGROUND)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().bg(theme::GRAY).fg(theme::FOREGROUND),
                (false, _) => theme::muted(),
            };
            spans.push(Span::styled(format!(" {symbol} "), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn render_submit(&self, area: Rect, buf: &mut Buffer) {
        match self.view {
            SubmitView::ConnectPrompt => {
                Paragraph::new(Line::styled(
                    CONNECT_PROMPT,
                    Style::default().fg(theme::WARNING),
                ))
                .wrap(Wrap { trim: true })
                .render(area, buf);
            }
            SubmitView::Ready(_) | SubmitView::Invalid(_) => {
                let button = Button::new("Place Limit Order")
                    .icon(Icon::new(IconName::ArrowRight))
                    .focused(self.focus == Field::Submit)
                    .disabled(self.status.is_pending() || matches!(self.view, SubmitView::Invalid(_)));
                let [button_area, error_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
                let [button_area, _] = Layout::horizontal([
                    Constraint::Length(button.width()),
                    Constraint::Fill(1),
                ])
                .areas(button_area);
                button.render(button_area, buf);

                if let SubmitView::Invalid(error) = self.view {
                    Paragraph::new(Line::styled(
                        error.to_string(),
                        Style::default().fg(theme::ERROR),
                    ))
                    .wrap(Wrap { trim: true })
                    .render(error_area, buf);
                }
            }
        }
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [form_area, summary_area, status_area] = Layout::vertical([
            Constraint::Length(15),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let card = Card::new().title("Place Limit Order");
        let inner = card.inner(form_area);
        card.render(form_area, buf);

        let [fields_area, _, submit_area] = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        let fields = vec![
            self.label("Tick Amount", Field::Tick),
            self.input(&self.form.tick_amount, Field::Tick),
            Line::default(),
            self.label("Token Amount", Field::Amount),
            self.input(&self.form.token_amount, Field::Amount),
            Line::default(),
            self.label("Token", Field::Token),
            self.selector(),
        ];
        Paragraph::new(fields).render(fields_area, buf);
        self.render_submit(submit_area, buf);

        let summary = Card::new().title("Order Summary");
        let summary_inner = summary.inner(summary_area);
        summary.render(summary_area, buf);
        Paragraph::new(Line::styled(self.form.summary(), theme::muted()))
            .render(summary_inner, buf);

        if let Some(line) = self.status.line() {
            Paragraph::new(line).render(status_area, buf);
        }
    }
}
