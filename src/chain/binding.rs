//! Generated bindings for the MessageBoard contract.

use alloy::sol;

sol! {
    /// Single-value message board: one public string, one setter.
    #[sol(rpc)]
    contract MessageBoard {
        function message() external view returns (string);
        function setMessage(string calldata value) external;
    }
}
