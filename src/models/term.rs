use std::fmt;

/// A search term after trimming and lowercasing. Used both as the upstream
/// query value and as the cache key, so `GIN` and ` gin ` share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedTerm(String);

impl NormalizedTerm {
    /// Returns `None` for blank or whitespace-only input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let term = raw.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self(term.to_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_variants_match() {
        assert_eq!(NormalizedTerm::new("GIN"), NormalizedTerm::new("  gin\t"));
        assert_eq!(NormalizedTerm::new(" Tom Collins ").unwrap().as_str(), "tom collins");
    }

    #[test]
    fn test_blank_terms_are_rejected() {
        assert!(NormalizedTerm::new("").is_none());
        assert!(NormalizedTerm::new("   ").is_none());
    }
}
