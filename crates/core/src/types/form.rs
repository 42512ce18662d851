/// Raw text of the order form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub tick_amount: String,
    pub token_amount: String,
    pub selected_token: String,
}

impl FormState {
    pub fn new(selected_token: impl Into<String>) -> Self {
        Self {
            tick_amount: String::new(),
            token_amount: String::new(),
            selected_token: selected_token.into(),
        }
    }

    /// The "Order Summary" line. Empty fields read as `0`.
    pub fn summary(&self) -> String {
        format!(
            "You will swap {} {} at tick {}",
            or_zero(&self.token_amount),
            self.selected_token,
            or_zero(&self.tick_amount)
        )
    }
}

fn or_zero(text: &str) -> &str {
    if text.is_empty() { "0" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_typed_values() {
        let state = FormState {
            tick_amount: "121".into(),
            token_amount: "5".into(),
            selected_token: "USDC".into(),
        };
        assert_eq!(state.summary(), "You will swap 5 USDC at tick 121");
    }

    #[test]
    fn summary_falls_back_to_zero() {
        let state = FormState::new("USDC");
        assert_eq!(state.summary(), "You will swap 0 USDC at tick 0");
    }

    #[test]
    fn summary_keeps_non_numeric_text_verbatim() {
        let state = FormState {
            tick_amount: "abc".into(),
            token_amount: " 1.5".into(),
            selected_token: "HOOKah".into(),
        };
        assert_eq!(state.summary(), "You will swap  1.5 HOOKah at tick abc");
    }
}
