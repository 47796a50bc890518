//! Response header naming for echoed pagination values.

pub const DEFAULT_HEADER_PREFIX: &str = "X-";

/// Build a header name from a parameter name using the default `X-` prefix.
///
/// # Examples
///
/// ```
/// use pagekit_core::construct_header;
///
/// assert_eq!(construct_header("page"), "X-Page");
/// assert_eq!(construct_header("pageSize"), "X-PageSize");
/// assert_eq!(construct_header(""), "");
/// ```
pub fn construct_header(name: &str) -> String {
    construct_header_with_prefix(DEFAULT_HEADER_PREFIX, name)
}

/// Build a header name as `prefix` + `name` with its first character
/// upper-cased. The rest of `name` is left untouched. An empty name yields an
/// empty string regardless of the prefix.
pub fn construct_header_with_prefix(prefix: &str, name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut header = String::with_capacity(prefix.len() + name.len());
    header.push_str(prefix);
    header.extend(first.to_uppercase());
    header.push_str(chars.as_str());
    header
}
