//! Wallet address format check.

/// Prefix every FVChain address starts with.
pub const ADDRESS_PREFIX: &str = "fvc";
/// Suffix every FVChain address ends with.
pub const ADDRESS_SUFFIX: &str = "emyl";
/// Number of hex characters between prefix and suffix.
pub const ADDRESS_HEX_LEN: usize = 36;
/// Total address length.
pub const ADDRESS_LEN: usize = ADDRESS_PREFIX.len() + ADDRESS_HEX_LEN + ADDRESS_SUFFIX.len();

/// Returns true iff `address` is `fvc` + 36 hex digits (either case) + `emyl`.
///
/// Only the format is checked; the server decides whether the wallet exists.
pub fn validate_address(address: &str) -> bool {
    if address.len() != ADDRESS_LEN {
        return false;
    }
    match address
        .strip_prefix(ADDRESS_PREFIX)
        .and_then(|rest| rest.strip_suffix(ADDRESS_SUFFIX))
    {
        Some(hex) => hex.len() == ADDRESS_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
