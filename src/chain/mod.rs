pub mod binding;
pub mod classify;
pub mod client;
pub mod signer;
pub mod worker;

pub fn module_name() -> &'static str {
    "chain"
}
