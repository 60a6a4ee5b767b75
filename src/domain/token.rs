/// One row of the portfolio panel.
///
/// Balances are plain display numbers, not on-chain amounts; the token list
/// is fixture data served by [`crate::infra::tokens`] until a real indexer
/// is wired in.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    pub name: String,
    pub symbol: String,
    pub balance: f64,
}

impl TokenBalance {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            balance,
        }
    }

    pub fn display_balance(&self) -> String {
        if self.balance.fract() == 0.0 {
            format!("{:.0}", self.balance)
        } else {
            format!("{}", self.balance)
        }
    }
}
