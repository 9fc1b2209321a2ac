//! Mapping entity associating a short identifier with its original URL.

/// A short-identifier to original-URL association.
///
/// Mappings are immutable once created: the store inserts them and serves
/// lookups, nothing ever updates or deletes one while the process lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_id: String,
    pub original_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_id: String, original_url: String) -> Self {
        Self {
            short_id,
            original_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new("123".to_string(), "https://example.com".to_string());

        assert_eq!(mapping.short_id, "123");
        assert_eq!(mapping.original_url, "https://example.com");
    }

    #[test]
    fn test_mapping_clone_is_equal() {
        let mapping = Mapping::new("7".to_string(), "https://rust-lang.org".to_string());
        let copy = mapping.clone();

        assert_eq!(mapping, copy);
    }
}
