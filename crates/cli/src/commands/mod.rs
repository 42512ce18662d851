pub mod decode;
pub mod encode;
pub mod submit;

use hookah_core::OrderForm;

/// Form values given on the command line. Unset fields keep the form's
/// initial value.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub tick: Option<String>,
    pub amount: Option<String>,
    pub token: Option<String>,
}

impl FormInput {
    pub fn apply(&self, form: &mut OrderForm) {
        if let Some(tick) = &self.tick {
            form.set_tick_amount(tick.as_str());
        }
        if let Some(amount) = &self.amount {
            form.set_token_amount(amount.as_str());
        }
        if let Some(token) = &self.token {
            form.select_token(token.as_str());
        }
    }
}
