use rust_decimal::Decimal;

use crate::command::AccountSlot;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub account_names: [String; 2],
    pub currency_symbol: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            account_names: ["Account 1".to_owned(), "Account 2".to_owned()],
            currency_symbol: "R$".to_owned(),
        }
    }
}

impl SessionConfig {
    pub fn account_name(&self, slot: AccountSlot) -> &str {
        &self.account_names[slot.index()]
    }

    /// Formats `amount` with the currency symbol. At least two decimal places
    /// are shown, finer fractions are printed in full and never rounded.
    pub fn money(&self, amount: Decimal) -> String {
        let amount = amount.normalize();
        if amount.scale() < 2 {
            format!("{}{amount:.2}", self.currency_symbol)
        } else {
            format!("{}{amount}", self.currency_symbol)
        }
    }
}
