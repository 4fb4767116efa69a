//! Sparse-merge rules for partial updates.
//!
//! An update only overwrites a field when the caller supplied a non-empty
//! value. `None` and `Some("")` are treated identically, so a field can never
//! be cleared through an update.

/// Return the incoming text only when it carries content.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Overwrite `current` with `incoming` if it is non-empty.
///
/// Returns `true` only when the stored value actually differs afterwards.
pub fn merge_text(current: &mut String, incoming: Option<&str>) -> bool {
    match non_empty(incoming) {
        Some(value) if value != current.as_str() => {
            value.clone_into(current);
            true
        }
        _ => false,
    }
}

/// Replace `current` with `incoming` if it is a non-empty list.
pub fn merge_list(current: &mut Vec<String>, incoming: Option<&[String]>) -> bool {
    match incoming.filter(|list| !list.is_empty()) {
        Some(list) if list != current.as_slice() => {
            *current = list.to_vec();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_blank() {
        assert_eq!(non_empty(Some("x")), Some("x"));
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn merge_text_overwrites_with_content() {
        let mut name = "old".to_string();
        assert!(merge_text(&mut name, Some("new")));
        assert_eq!(name, "new");
    }

    #[test]
    fn merge_text_same_value_is_not_a_change() {
        let mut name = "same".to_string();
        assert!(!merge_text(&mut name, Some("same")));
        assert_eq!(name, "same");
    }

    #[test]
    fn merge_text_keeps_value_for_empty_or_absent() {
        let mut name = "old".to_string();
        assert!(!merge_text(&mut name, Some("")));
        assert!(!merge_text(&mut name, None));
        assert_eq!(name, "old");
    }

    #[test]
    fn merge_list_ignores_empty_list() {
        let mut stacks = vec!["rust".to_string()];
        assert!(!merge_list(&mut stacks, Some(&[])));
        assert!(!merge_list(&mut stacks, None));
        assert_eq!(stacks, vec!["rust".to_string()]);

        let incoming = vec!["go".to_string(), "sql".to_string()];
        assert!(merge_list(&mut stacks, Some(&incoming)));
        assert_eq!(stacks, incoming);
    }
}
