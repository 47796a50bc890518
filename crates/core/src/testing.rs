use std::collections::HashMap;

use crate::context::PaginationContext;

/// In-memory [`PaginationContext`] for unit tests.
#[derive(Debug, Default)]
pub struct MemoryContext {
    pub query: Vec<(String, String)>,
    pub values: HashMap<String, i64>,
    pub headers: Vec<(String, String)>,
}

impl MemoryContext {
    pub fn with_query(pairs: &[(&str, &str)]) -> Self {
        Self {
            query: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl PaginationContext for MemoryContext {
    fn query_or(&self, key: &str, default: &str) -> String {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| default.to_string())
    }

    fn set_value(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }
}
