//! Encoding for the `stacks` column.
//!
//! Stacks are an ordered list of technology names persisted as a JSON array
//! inside a `TEXT` column. Reads are lenient: anything that does not decode
//! as a string array comes back as an empty list.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stacks(Vec<String>);

impl Stacks {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Decode a stored column value.
    pub fn decode(raw: &str) -> Self {
        serde_json::from_str::<Vec<String>>(raw)
            .map(Self)
            .unwrap_or_default()
    }

    pub fn as_mut_vec(&mut self) -> &mut Vec<String> {
        &mut self.0
    }
}

/// Encode a list for storage. Always yields a JSON array, never `null`.
pub fn encode_list(items: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

impl Deref for Stacks {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Stacks {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<String> for Stacks {
    fn from(raw: String) -> Self {
        Self::decode(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_json_array() {
        let items = vec!["rust".to_string(), "postgres".to_string()];
        assert_eq!(encode_list(&items), r#"["rust","postgres"]"#);
    }

    #[test]
    fn empty_encodes_as_empty_array() {
        assert_eq!(encode_list(&Stacks::default()), "[]");
    }

    #[test]
    fn decode_preserves_order() {
        let stacks = Stacks::decode(r#"["b","a","c"]"#);
        assert_eq!(
            stacks.to_vec(),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn undecodable_values_read_as_empty() {
        assert!(Stacks::decode("").is_empty());
        assert!(Stacks::decode("null").is_empty());
        assert!(Stacks::decode("not json").is_empty());
        assert!(Stacks::decode(r#"{"a":1}"#).is_empty());
    }

    #[test]
    fn serializes_transparently() {
        let stacks = Stacks::new(vec!["go".into()]);
        assert_eq!(serde_json::to_string(&stacks).unwrap(), r#"["go"]"#);
    }
}
