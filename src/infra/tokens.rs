use crate::domain::token::TokenBalance;

/// Static demo fixture shown in the tokens panel. There is no token
/// indexer behind the dashboard; real balances would need one.
pub fn mock_tokens() -> Vec<TokenBalance> {
    vec![
        TokenBalance {
            name: "Crypto Cat".to_owned(),
            symbol: "CAT".to_owned(),
            balance: 5.0,
        },
        TokenBalance {
            name: "Moon Token".to_owned(),
            symbol: "MOON".to_owned(),
            balance: 12.0,
        },
    ]
}
