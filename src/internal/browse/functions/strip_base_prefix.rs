use crate::browse::ListingError;

/// 从绝对地址中剥离基准前缀，得到以 '/' 开头的相对路径
///
/// 地址必须以基准前缀开头（前缀末尾斜杠忽略），否则返回 PrefixMismatch；
/// 地址等于前缀本身时返回 "/"
pub fn strip_base_prefix(
    address: &str,
    base_prefix: &str,
) -> Result<String, ListingError> {
    let base = base_prefix.trim_end_matches('/');

    match address.strip_prefix(base) {
        Some("") => Ok("/".to_string()),
        Some(rest) if rest.starts_with('/') => Ok(rest.to_string()),
        _ => Err(ListingError::PrefixMismatch {
            address: address.to_string(),
            base: base.to_string(),
        }),
    }
}
