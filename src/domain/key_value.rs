//! Editors for header and query-parameter mappings
//!
//! Both editors return a new mapping and leave their input untouched.

use super::KeyValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Blank values are rejected
    Required,
    /// Empty values are stored as-is
    Optional,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyValueEditor {
    policy: ValuePolicy,
}

/// Request headers need both a name and a value.
pub const HEADERS: KeyValueEditor = KeyValueEditor {
    policy: ValuePolicy::Required,
};

/// Query parameters may have an empty value (`?flag=`).
pub const QUERY_PARAMS: KeyValueEditor = KeyValueEditor {
    policy: ValuePolicy::Optional,
};

impl KeyValueEditor {
    pub const fn new(policy: ValuePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }

    pub fn accepts(&self, key: &str, value: &str) -> bool {
        if key.trim().is_empty() {
            return false;
        }
        match self.policy {
            ValuePolicy::Required => !value.trim().is_empty(),
            ValuePolicy::Optional => true,
        }
    }

    /// Insert or overwrite `key`. Rejected input returns the mapping unchanged.
    pub fn add(&self, entries: &KeyValues, key: &str, value: &str) -> KeyValues {
        let mut updated = entries.clone();
        if self.accepts(key, value) {
            updated.insert(key.to_string(), value.to_string());
        }
        updated
    }

    pub fn remove(&self, entries: &KeyValues, key: &str) -> KeyValues {
        let mut updated = entries.clone();
        updated.remove(key);
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeyValues {
        let mut entries = KeyValues::new();
        entries.insert("Accept".to_string(), "application/json".to_string());
        entries
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let entries = sample();
        assert_eq!(HEADERS.add(&entries, "", "x"), entries);
        assert_eq!(QUERY_PARAMS.add(&entries, "   ", "x"), entries);
    }

    #[test]
    fn test_header_requires_value() {
        let entries = sample();
        assert_eq!(HEADERS.add(&entries, "X-Trace", "  "), entries);
        let updated = HEADERS.add(&entries, "X-Trace", "abc");
        assert_eq!(updated.get("X-Trace").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_param_accepts_empty_value() {
        let updated = QUERY_PARAMS.add(&KeyValues::new(), "flag", "");
        assert_eq!(updated.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn test_duplicate_add_overwrites() {
        let updated = HEADERS.add(&sample(), "Accept", "text/plain");
        assert_eq!(updated.len(), 1);
        assert_eq!(updated["Accept"], "text/plain");
    }

    #[test]
    fn test_remove() {
        let entries = sample();
        assert_eq!(HEADERS.remove(&entries, "missing-key"), entries);
        assert!(HEADERS.remove(&entries, "Accept").is_empty());
        // input untouched
        assert_eq!(entries.len(), 1);
    }
}
