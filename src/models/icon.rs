//! Weather icon payload

use std::sync::Arc;

/// Icon image exactly as served upstream. The bytes are never decoded.
///
/// Cloning shares the underlying bytes, so icons are cheap to hand out of
/// the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Icon id, e.g. `01d`
    pub id: String,
    /// Content type reported upstream
    pub content_type: String,
    pub data: Arc<[u8]>,
}

impl Icon {
    pub fn new(id: impl Into<String>, content_type: impl Into<String>, data: &[u8]) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            data: Arc::from(data),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Checks an icon id before it is used as a cache key or in a URL.
///
/// Upstream ids are short alphanumeric codes such as `01d` or `50n`.
pub fn is_valid_icon_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 16 && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_clone_shares_bytes() {
        let icon = Icon::new("01d", "image/png", &[0x89, b'P', b'N', b'G']);
        let copy = icon.clone();

        assert!(Arc::ptr_eq(&icon.data, &copy.data));
        assert_eq!(copy.len(), 4);
        assert!(!copy.is_empty());
    }

    #[test]
    fn test_icon_id_validation() {
        assert!(is_valid_icon_id("01d"));
        assert!(is_valid_icon_id("50n"));
        assert!(!is_valid_icon_id(""));
        assert!(!is_valid_icon_id("../etc"));
        assert!(!is_valid_icon_id("10d.png"));
        assert!(!is_valid_icon_id(&"a".repeat(17)));
    }
}
