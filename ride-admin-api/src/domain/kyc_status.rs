use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

pub const STATUS_VERIFIED: &str = "verified";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SUBMITTED: &str = "submitted";
pub const STATUS_INCOMPLETE: &str = "incomplete";
pub const STATUS_NOT_SUBMITTED: &str = "not-submitted";

/// Canonical KYC verification status shown on badges, filters and stats.
///
/// Legacy records may carry status strings outside the known set; those
/// survive derivation verbatim as [`KycStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KycStatus {
    Verified,
    Rejected,
    Pending,
    Submitted,
    Incomplete,
    NotSubmitted,
    Other(String),
}

impl KycStatus {
    pub fn as_str(&self) -> &str {
        match self {
            KycStatus::Verified => STATUS_VERIFIED,
            KycStatus::Rejected => STATUS_REJECTED,
            KycStatus::Pending => STATUS_PENDING,
            KycStatus::Submitted => STATUS_SUBMITTED,
            KycStatus::Incomplete => STATUS_INCOMPLETE,
            KycStatus::NotSubmitted => STATUS_NOT_SUBMITTED,
            KycStatus::Other(value) => value.as_str(),
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KycStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            STATUS_VERIFIED => KycStatus::Verified,
            STATUS_REJECTED => KycStatus::Rejected,
            STATUS_PENDING => KycStatus::Pending,
            STATUS_SUBMITTED => KycStatus::Submitted,
            STATUS_INCOMPLETE => KycStatus::Incomplete,
            STATUS_NOT_SUBMITTED => KycStatus::NotSubmitted,
            other => KycStatus::Other(other.to_string()),
        })
    }
}

impl From<&str> for KycStatus {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl Serialize for KycStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KycStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        Ok(KycStatus::from(value_str.as_str()))
    }
}

/// Empty strings count as unset, the same as a missing field.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|value| !value.is_empty())
}

/// Derive the display status from the raw storage fields.
///
/// Rules are applied in order and the first match wins:
/// 1. No documents: `rejected` if the text says so or the flag is `false`,
///    otherwise `not-submitted`. Never `pending` or `submitted`.
/// 2. Flag is set: `verified` when `true`; when `false`, `rejected` if the
///    text says so, otherwise `pending`.
/// 3. Documents exist but the text is unset or `not-submitted`: `submitted`.
/// 4. The text itself, or `not-submitted` when unset.
pub fn derive_status(
    approved_flag: Option<bool>,
    status_text: Option<&str>,
    document_count: usize,
) -> KycStatus {
    let status_text = non_empty(status_text);
    let says_rejected = status_text == Some(STATUS_REJECTED);

    if document_count == 0 {
        if says_rejected || approved_flag == Some(false) {
            return KycStatus::Rejected;
        }
        return KycStatus::NotSubmitted;
    }

    if let Some(approved) = approved_flag {
        if approved {
            return KycStatus::Verified;
        }
        if says_rejected {
            return KycStatus::Rejected;
        }
        return KycStatus::Pending;
    }

    match status_text {
        None | Some(STATUS_NOT_SUBMITTED) => KycStatus::Submitted,
        Some(text) => KycStatus::from(text),
    }
}
