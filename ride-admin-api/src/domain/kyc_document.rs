use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An uploaded identity document, keyed in [`KycDocuments`] by its slot
/// (e.g. `license`, `id_front`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocument {
    /// Storage URL of the file; the slot counts as uploaded only when this is non-empty
    pub url: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub document_type: HeaplessString<50>,
}

impl KycDocument {
    pub fn is_present(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Documents of one driver by slot key
pub type KycDocuments = BTreeMap<String, KycDocument>;

/// True when at least one document exists and every one of them has a file.
///
/// An admin may only approve a complete submission.
pub fn is_submission_complete(documents: &KycDocuments) -> bool {
    !documents.is_empty() && documents.values().all(KycDocument::is_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(url: Option<&str>) -> KycDocument {
        KycDocument {
            url: url.map(str::to_string),
            uploaded_at: None,
            document_type: HeaplessString::try_from("license").unwrap(),
        }
    }

    #[test]
    fn test_empty_submission_is_incomplete() {
        assert!(!is_submission_complete(&KycDocuments::new()));
    }

    #[test]
    fn test_missing_url_makes_submission_incomplete() {
        let mut documents = KycDocuments::new();
        documents.insert("a".to_string(), doc(Some("x")));
        documents.insert("b".to_string(), doc(None));
        assert!(!is_submission_complete(&documents));

        documents.insert("b".to_string(), doc(Some("")));
        assert!(!is_submission_complete(&documents));
    }

    #[test]
    fn test_all_urls_present_is_complete() {
        let mut documents = KycDocuments::new();
        documents.insert("a".to_string(), doc(Some("x")));
        assert!(is_submission_complete(&documents));
    }
}
