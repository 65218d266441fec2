/// User agent sent with every request, e.g. `fvchain-sdk-rust/1.0.0`.
pub(crate) fn get_user_agent() -> &'static str {
    concat!("fvchain-sdk-rust/", env!("CARGO_PKG_VERSION"))
}
