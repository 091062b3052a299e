/// Returns the cache key for a dividend value.
///
/// The key is a plain delimited concatenation of the lookup key components.
/// Both components are discrete (a netuid and an ss58 address), so no
/// escaping or normalization is applied: two keys are equal iff both
/// components match exactly.
pub fn dividend_key(netuid: u16, hotkey: &str) -> String {
    format!("dividends:{}:{}", netuid, hotkey)
}
