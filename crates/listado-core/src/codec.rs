//! Persisted Form
//!
//! The list is stored as a JSON array of strings, with no version or metadata.

use crate::error::{StoreError, StoreResult};
use crate::list::ItemList;

pub fn encode(items: &ItemList) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

/// Parse a persisted value. Anything other than an array of strings is malformed.
pub fn decode(raw: &str) -> StoreResult<ItemList> {
    serde_json::from_str(raw).map_err(StoreError::MalformedPersistedState)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_plain_json_array() {
        let items: ItemList = ["milk", "say \"hi\""].into_iter().collect();
        assert_eq!(encode(&items).unwrap(), r#"["milk","say \"hi\""]"#);
        assert_eq!(encode(&ItemList::new()).unwrap(), "[]");
    }

    #[test]
    fn test_decode_preserves_order() {
        let items = decode(r#"["b","a","b"]"#).unwrap();
        assert_eq!(items.as_slice(), ["b", "a", "b"]);
    }

    #[test]
    fn test_decode_rejects_non_string_arrays() {
        for raw in ["", "not json", "null", "{}", "42", r#""milk""#, r#"[1,2]"#, r#"["a",null]"#, "[\"a\""] {
            let err = decode(raw).unwrap_err();
            assert!(matches!(err, StoreError::MalformedPersistedState(_)), "{raw}");
        }
    }

    #[test]
    fn test_unicode_and_markup_survive() {
        let items: ItemList = ["ñandú 🥚", "<b>bold</b>", "line\nbreak"].into_iter().collect();
        let raw = encode(&items).unwrap();
        assert_eq!(decode(&raw).unwrap(), items);
    }
}
