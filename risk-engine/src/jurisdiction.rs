//! High-risk jurisdiction list

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Country codes flagged for elevated scrutiny
///
/// Codes are held trimmed and upper-cased; lookups normalize the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionList {
    codes: HashSet<String>,
}

impl Default for JurisdictionList {
    fn default() -> Self {
        Self::new(["PA", "KY", "VG", "BS", "RU"])
    }
}

impl JurisdictionList {
    /// Create a list from country codes, normalizing case
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes
                .into_iter()
                .map(|c| c.as_ref().trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .collect(),
        }
    }

    /// Check if a country code is high risk
    ///
    /// The empty code never matches.
    pub fn contains(&self, country_code: &str) -> bool {
        let normalized = country_code.trim().to_uppercase();
        !normalized.is_empty() && self.codes.contains(&normalized)
    }

    /// Add a country code to the list
    pub fn insert(&mut self, country_code: &str) {
        let normalized = country_code.trim().to_uppercase();
        if !normalized.is_empty() {
            self.codes.insert(normalized);
        }
    }

    /// Number of listed jurisdictions
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_membership() {
        let list = JurisdictionList::default();
        assert_eq!(list.len(), 5);

        for code in ["PA", "KY", "VG", "BS", "RU"] {
            assert!(list.contains(code));
        }
        assert!(!list.contains("CO"));
        assert!(!list.contains("US"));
    }

    #[test]
    fn test_lookup_normalizes_case() {
        let list = JurisdictionList::default();
        assert!(list.contains("ru"));
        assert!(list.contains(" pa "));
    }

    #[test]
    fn test_empty_code_never_matches() {
        let list = JurisdictionList::default();
        assert!(!list.contains(""));
        assert!(!list.contains("   "));
    }

    #[test]
    fn test_insert_normalizes() {
        let mut list = JurisdictionList::new(Vec::<&str>::new());
        assert!(list.is_empty());

        list.insert(" ir ");
        assert!(list.contains("IR"));

        list.insert("");
        assert_eq!(list.len(), 1);
    }
}
