//! Recipient binding inside the plaintext payload
//!
//! A sender may address a message to one recipient id, an opaque string the
//! two parties agree on out-of-band. Binding is structural: the id is
//! prefixed to the plaintext as `"<id>::"` before sealing and verified by
//! string comparison after opening. It is not part of the AEAD associated
//! data; see the design notes for that trade-off.

use crate::error::{ErrorCategory, ErrorKind, Result, SealnoteError};

/// Separator between the recipient id and the message text.
const SEPARATOR: &str = "::";

/// Prefix the text with the recipient id, if one was supplied.
///
/// Pure and total. Ids containing the separator itself are not rejected,
/// but make the bound payload ambiguous and are best avoided.
pub fn bind(text: &str, recipient: Option<&str>) -> String {
    match recipient {
        Some(id) => format!("{}{}{}", id, SEPARATOR, text),
        None => text.to_owned(),
    }
}

/// Verify and strip the recipient prefix from a recovered payload.
///
/// | id supplied | payload prefix      | outcome              |
/// |-------------|---------------------|----------------------|
/// | yes         | matches supplied id | stripped remainder   |
/// | yes         | other / none        | `RecipientMismatch`  |
/// | no          | looks bound         | `RecipientMissing`   |
/// | no          | none                | payload unchanged    |
pub fn unbind(payload: &str, recipient: Option<&str>) -> Result<String> {
    match recipient {
        Some(id) => {
            let prefix = format!("{}{}", id, SEPARATOR);
            match payload.strip_prefix(&prefix) {
                Some(rest) => Ok(rest.to_owned()),
                None => Err(SealnoteError::new(
                    ErrorCategory::User,
                    ErrorKind::RecipientMismatch,
                    "message is not addressed to the supplied recipient id",
                )),
            }
        }
        None => {
            if looks_bound(payload) {
                Err(SealnoteError::new(
                    ErrorCategory::User,
                    ErrorKind::RecipientMissing,
                    "message is addressed to a recipient; supply its id to read it",
                ))
            } else {
                Ok(payload.to_owned())
            }
        }
    }
}

/// Heuristic for payloads that appear to carry a recipient prefix: a
/// non-empty run of ASCII letters, digits, or hyphens before the first
/// separator. Legitimate unbound text can match coincidentally; the format
/// accepts that false-positive risk.
fn looks_bound(payload: &str) -> bool {
    match payload.split_once(SEPARATOR) {
        Some((prefix, _)) => {
            !prefix.is_empty()
                && prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_without_recipient() {
        assert_eq!(bind("hello", None), "hello");
    }

    #[test]
    fn test_bind_with_recipient() {
        assert_eq!(bind("hello", Some("user-1")), "user-1::hello");
    }

    #[test]
    fn test_bind_empty_text() {
        assert_eq!(bind("", Some("user-1")), "user-1::");
    }

    #[test]
    fn test_unbind_round_trip() {
        let payload = bind("hello", Some("user-1"));
        assert_eq!(unbind(&payload, Some("user-1")).unwrap(), "hello");
    }

    #[test]
    fn test_unbind_wrong_id() {
        let payload = bind("hello", Some("user-1"));
        let err = unbind(&payload, Some("user-2")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecipientMismatch);
    }

    #[test]
    fn test_unbind_id_is_prefix_of_actual_id() {
        // "user-1" must not match a payload bound to "user-12".
        let payload = bind("hello", Some("user-12"));
        let err = unbind(&payload, Some("user-1")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecipientMismatch);
    }

    #[test]
    fn test_unbind_id_supplied_but_payload_unbound() {
        let err = unbind("hello", Some("user-1")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecipientMismatch);
    }

    #[test]
    fn test_unbind_bound_payload_without_id() {
        let payload = bind("hello", Some("user-1"));
        let err = unbind(&payload, None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecipientMissing);
    }

    #[test]
    fn test_unbind_plain_text_without_id() {
        assert_eq!(unbind("hello world", None).unwrap(), "hello world");
    }

    #[test]
    fn test_heuristic_false_positive_is_accepted() {
        // Unbound text that happens to match the bound shape is reported as
        // bound; a documented limitation of structural binding.
        let err = unbind("notes::remember the milk", None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecipientMissing);
    }

    #[test]
    fn test_heuristic_rejects_non_id_prefixes() {
        // Space, empty prefix, and non-ASCII are outside the id charset.
        assert_eq!(unbind("a b::c", None).unwrap(), "a b::c");
        assert_eq!(unbind("::c", None).unwrap(), "::c");
        assert_eq!(unbind("héllo::c", None).unwrap(), "héllo::c");
    }

    #[test]
    fn test_remainder_may_contain_separator() {
        let payload = bind("a::b", Some("user-1"));
        assert_eq!(unbind(&payload, Some("user-1")).unwrap(), "a::b");
    }
}
