//! The slice of a host framework's request/response the interceptor needs.

/// Per-request store supplied by the host framework.
///
/// Implementations wrap whatever the framework exposes for one request: the
/// decoded query string on the way in, a key/value map for downstream
/// handlers, and the pending response headers.
pub trait PaginationContext {
    /// Query value for `key`, or `default` when the key is absent.
    ///
    /// A key that is present with an empty value is not absent.
    fn query_or(&self, key: &str, default: &str) -> String;

    /// Store a validated value for downstream handlers.
    fn set_value(&mut self, key: &str, value: i64);

    /// Queue a header on the eventual response.
    fn set_header(&mut self, name: &str, value: &str);
}
