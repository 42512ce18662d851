use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use alloy::primitives::Address;
use hookah_core::{
    AccountProvider, Notification, OrderConfig, OrderForm, SubmissionError, SubmissionResult,
    SubmitView, TransactionSubmitter,
};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Tabs, Wrap},
};
use tokio::{runtime::Handle, sync::mpsc};
use tracing::{info, warn};

use crate::{
    notify::ChannelNotifier,
    ui::{
        primitives::Card,
        router::{Router, Tab},
        screens::{FeaturesScreen, Field, HomeScreen, TxStatus},
        theme,
    },
    wallet::WalletSession,
};

const TICK_RATE: Duration = Duration::from_millis(100);
const TOAST_TTL: Duration = Duration::from_secs(6);
const HELP: &str = "Tab/↑↓ move · ←→ token · Enter submit · Ctrl+W wallet · F1/F2 tabs · Esc quit";

type SubmissionReply = Result<SubmissionResult, SubmissionError>;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    expires_at: Instant,
}

/// Interactive state: active tab, the order form and everything in flight.
pub struct App {
    router: Router,
    form: OrderForm,
    focus: Field,
    wallet: Arc<WalletSession>,
    submitter: Option<Arc<dyn TransactionSubmitter>>,
    status: TxStatus,
    toasts: Vec<Toast>,
    notifications: mpsc::UnboundedReceiver<Notification>,
    replies_tx: mpsc::UnboundedSender<SubmissionReply>,
    replies_rx: mpsc::UnboundedReceiver<SubmissionReply>,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: OrderConfig,
        wallet: Arc<WalletSession>,
        submitter: Option<Arc<dyn TransactionSubmitter>>,
    ) -> Self {
        let (notifier, notifications) = ChannelNotifier::new();
        let accounts: Arc<dyn AccountProvider> = wallet.clone();
        let form = OrderForm::new(config, accounts, Arc::new(notifier));
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();

        Self {
            router: Router::default(),
            form,
            focus: Field::default(),
            wallet,
            submitter,
            status: TxStatus::default(),
            toasts: Vec::new(),
            notifications,
            replies_tx,
            replies_rx,
            should_quit: false,
        }
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.router.set_active(tab);
        self
    }

    pub fn tab(&self) -> Tab {
        self.router.active()
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn status(&self) -> &TxStatus {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn toast_titles(&self) -> Vec<&str> {
        self.toasts
            .iter()
            .map(|toast| toast.notification.title.as_str())
            .collect()
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> eyre::Result<()> {
        while !self.should_quit {
            self.drain();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('w') if ctrl => self.toggle_wallet(),
            KeyCode::F(1) => self.router.set_active(Tab::Home),
            KeyCode::F(2) => self.router.set_active(Tab::Features),
            KeyCode::Esc => match self.router.active() {
                Tab::Features => self.router.set_active(Tab::Home),
                Tab::Home => self.should_quit = true,
            },
            _ => match self.router.active() {
                Tab::Home => self.handle_form_key(key),
                Tab::Features => {
                    if let Some(tab) = FeaturesScreen.handle_key(&key) {
                        self.router.set_active(tab);
                    }
                }
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match (key.code, self.focus) {
            (KeyCode::Tab | KeyCode::Down, _) => self.focus = self.focus.next(),
            (KeyCode::BackTab | KeyCode::Up, _) => self.focus = self.focus.prev(),
            (KeyCode::Enter, Field::Submit) => self.submit(),
            (KeyCode::Enter, _) => self.focus = self.focus.next(),
            (KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), Field::Token) => {
                self.toggle_token()
            }
            (KeyCode::Char(ch), field) if field.is_text() && is_typed(&key) => {
                let mut value = self.field_text(field).to_string();
                value.push(ch);
                self.set_field_text(field, value);
            }
            (KeyCode::Backspace, field) if field.is_text() => {
                let mut value = self.field_text(field).to_string();
                value.pop();
                self.set_field_text(field, value);
            }
            _ => {}
        }
    }

    fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Tick => &self.form.state().tick_amount,
            _ => &self.form.state().token_amount,
        }
    }

    fn set_field_text(&mut self, field: Field, value: String) {
        match field {
            Field::Tick => self.form.set_tick_amount(value),
            _ => self.form.set_token_amount(value),
        }
    }

    fn toggle_token(&mut self) {
        let [first, second] = self.form.config().tokens.symbols();
        let next = if self.form.state().selected_token == first {
            second
        } else {
            first
        }
        .to_string();
        self.form.select_token(next);
    }

    fn toggle_wallet(&mut self) {
        if !self.wallet.is_available() {
            warn!("no signer configured, pass --private-key to connect");
            return;
        }
        let connected = self.wallet.toggle();
        info!(connected, "wallet toggled");
    }

    fn submit(&mut self) {
        if self.status.is_pending() {
            return;
        }

        let calls = match self.form.view() {
            SubmitView::Ready(calls) => calls,
            SubmitView::ConnectPrompt | SubmitView::Invalid(_) => return,
        };

        let Some(submitter) = self.submitter.clone() else {
            warn!("no RPC endpoint configured, pass --rpc-url to submit");
            self.status = TxStatus::Failed("no RPC endpoint configured".into());
            return;
        };
        let Ok(runtime) = Handle::try_current() else {
            self.status = TxStatus::Failed("no async runtime".into());
            return;
        };

        info!(calls = calls.len(), summary = %self.form.summary(), "submitting limit order");
        self.status = TxStatus::Pending;
        let replies = self.replies_tx.clone();
        runtime.spawn(async move {
            let reply = submitter.submit(&calls).await;
            let _ = replies.send(reply);
        });
    }

    /// Applies finished submissions and collects delivered notifications.
    pub fn drain(&mut self) {
        while let Ok(reply) = self.replies_rx.try_recv() {
            let handled = reply.and_then(|result| self.form.on_success(&result));
            self.status = match handled {
                Ok(dispatched) => TxStatus::Confirmed(dispatched.tx_hash),
                Err(error) => {
                    self.form.on_error(&error);
                    TxStatus::Failed(error.to_string())
                }
            };
        }

        let now = Instant::now();
        while let Ok(notification) = self.notifications.try_recv() {
            self.toasts.push(Toast {
                notification,
                expires_at: now + TOAST_TTL,
            });
        }
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.draw_header(frame, header);

        match self.router.active() {
            Tab::Home => {
                let view = self.form.view();
                let tokens = self.form.config().tokens.symbols();
                let screen = HomeScreen::new(self.form.state(), tokens, &view, &self.status)
                    .focus(self.focus);
                frame.render_widget(screen, body);
            }
            Tab::Features => frame.render_widget(FeaturesScreen, body),
        }

        frame.render_widget(Paragraph::new(Span::styled(HELP, theme::muted())), footer);
        self.draw_toasts(frame, body);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let wallet = match self.form.account() {
            Some(account) => Span::styled(short_address(account), Style::default().fg(theme::SUCCESS)),
            None => Span::styled("wallet disconnected", theme::muted()),
        };
        let [tabs_area, wallet_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(wallet.width() as u16),
        ])
        .areas(area);

        let tabs = Tabs::new(Tab::ALL.iter().map(|tab| tab.title()))
            .select(self.router.active().index())
            .style(theme::muted())
            .highlight_style(theme::focused());
        frame.render_widget(tabs, tabs_area);
        frame.render_widget(Line::from(wallet), wallet_area);
    }

    fn draw_toasts(&self, frame: &mut Frame, area: Rect) {
        let mut area = area;
        for toast in self.toasts.iter().rev() {
            let [slot] = Layout::horizontal([Constraint::Length(48)])
                .flex(Flex::End)
                .areas(area);
            let [slot, rest] =
                Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(slot);

            let card = Card::new().title(&toast.notification.title);
            let inner = card.inner(slot);
            frame.render_widget(Clear, slot);
            frame.render_widget(card, slot);
            frame.render_widget(
                Paragraph::new(toast.notification.body.as_str()).wrap(Wrap { trim: true }),
                inner,
            );

            area = Rect {
                y: rest.y,
                height: rest.height,
                ..area
            };
            if area.height < 5 {
                break;
            }
        }
    }
}

/// Plain or shifted characters. Other chords are shortcuts, not text.
fn is_typed(key: &KeyEvent) -> bool {
    key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn short_address(address: Address) -> String {
    let full = address.to_checksum(None);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{B256, b256};
    use async_trait::async_trait;
    use hookah_core::{CallPayload, ORDER_PLACED_TITLE, ResetPolicy, TransactionReceipt};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Mutex;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const HASH: B256 = b256!("0x00000000000000000000000000000000000000000000000000000000000abc12");

    #[derive(Default)]
    struct Capture(Mutex<Vec<Vec<CallPayload>>>);

    #[async_trait]
    impl TransactionSubmitter for Capture {
        async fn submit(&self, calls: &[CallPayload]) -> Result<SubmissionResult, SubmissionError> {
            self.0.lock().unwrap().push(calls.to_vec());
            Ok(SubmissionResult {
                transaction_receipts: vec![TransactionReceipt {
                    transaction_hash: HASH,
                    block_number: Some(1),
                }],
            })
        }
    }

    struct Rejecting;

    #[async_trait]
    impl TransactionSubmitter for Rejecting {
        async fn submit(&self, _calls: &[CallPayload]) -> Result<SubmissionResult, SubmissionError> {
            Err(SubmissionError::Rejected("user denied".into()))
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn connected_app(config: OrderConfig, submitter: Option<Arc<dyn TransactionSubmitter>>) -> App {
        let wallet = Arc::new(WalletSession::from_key(Some(KEY)).unwrap());
        App::new(config, wallet, submitter)
    }

    async fn settle(app: &mut App) {
        for _ in 0..50 {
            tokio::task::yield_now().await;
            app.drain();
            if !app.status().is_pending() && !app.toasts.is_empty() {
                break;
            }
        }
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = connected_app(OrderConfig::default(), None);
        type_text(&mut app, "121");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "55");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);

        let state = app.form().state();
        assert_eq!(state.tick_amount, "121");
        assert_eq!(state.token_amount, "5");
        assert_eq!(state.selected_token, "USDC");
        assert_eq!(app.form().summary(), "You will swap 5 USDC at tick 121");
    }

    #[test]
    fn modifier_chords_are_not_typed() {
        let mut app = connected_app(OrderConfig::default(), None);
        type_text(&mut app, "1");
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::SHIFT));

        assert_eq!(app.form().state().tick_amount, "12");
    }

    #[test]
    fn tabs_switch_and_escape_returns_home() {
        let mut app = connected_app(OrderConfig::default(), None);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.tab(), Tab::Features);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tab(), Tab::Home);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_w_disconnects_wallet() {
        let mut app = connected_app(OrderConfig::default(), None);
        assert!(app.form().account().is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(app.form().account(), None);
        assert_eq!(app.form().state().tick_amount, "");
    }

    #[tokio::test]
    async fn submit_confirms_and_shows_toast() {
        let capture = Arc::new(Capture::default());
        let mut app = connected_app(OrderConfig::default(), Some(capture.clone()));
        type_text(&mut app, "121");
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status(), &TxStatus::Pending);

        settle(&mut app).await;

        assert_eq!(app.status(), &TxStatus::Confirmed(HASH));
        assert_eq!(app.toast_titles(), vec![ORDER_PLACED_TITLE]);
        assert_eq!(capture.0.lock().unwrap().len(), 1);
        assert_eq!(app.form().state().tick_amount, "121");
    }

    #[tokio::test]
    async fn clear_policy_resets_form_after_success() {
        let config = OrderConfig {
            reset: ResetPolicy::Clear,
            ..OrderConfig::default()
        };
        let mut app = connected_app(config, Some(Arc::new(Capture::default())));
        type_text(&mut app, "121");
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.form().state().tick_amount, "");
    }

    #[tokio::test]
    async fn rejected_submission_reports_failure() {
        let mut app = connected_app(OrderConfig::default(), Some(Arc::new(Rejecting)));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert!(matches!(app.status(), TxStatus::Failed(reason) if reason.contains("user denied")));
        assert!(app.toast_titles().is_empty());
    }

    #[test]
    fn submit_without_rpc_fails_fast() {
        let mut app = connected_app(OrderConfig::default(), None);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.status(), TxStatus::Failed(_)));
    }

    #[test]
    fn draws_home_with_connect_prompt_when_disconnected() {
        let wallet = Arc::new(WalletSession::new(None));
        let mut app = App::new(OrderConfig::default(), wallet, None);

        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let text = crate::ui::test_support::rendered(terminal.backend().buffer());
        assert!(text.contains("wallet disconnected"));
        assert!(text.contains(hookah_core::CONNECT_PROMPT));
        assert!(text.contains("Features"));
    }
}
