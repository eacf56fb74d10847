use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// A backend row. `(bucket, key)` is the logical identity; uniqueness is
/// enforced backend-side.
#[derive(Debug, Clone, PartialEq)]
pub struct KvTuple {
    pub bucket: String,
    pub key: String,
    /// Opaque string payload; the client never interprets it.
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// One entry of a batch get: fetch the current value for `key`, with the
/// caller's last-known `modified_at` passed through to the backend `mget`
/// procedure (which owns the differs/overrides semantics).
#[derive(Debug, Clone, PartialEq)]
pub struct MgetCondition {
    pub key: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl MgetCondition {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modified_at: None,
        }
    }

    pub fn modified_at(mut self, ts: DateTime<Utc>) -> Self {
        self.modified_at = Some(ts);
        self
    }
}

/// One entry of a batch set. When `modified_at` is absent the backend
/// assigns the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub key: String,
    pub data: String,
    pub modified_at: Option<DateTime<Utc>>,
}

impl BatchRecord {
    pub fn new(key: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            data: data.into(),
            modified_at: None,
        }
    }

    pub fn modified_at(mut self, ts: DateTime<Utc>) -> Self {
        self.modified_at = Some(ts);
        self
    }
}

/// Result tag produced by the backend upsert procedure.
///
/// `Rejected` is reported for any backend-side refusal; when a stale
/// `modified_at` was supplied it signals an optimistic-concurrency loss, but
/// the backend does not distinguish sub-kinds and neither do we.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Inserted,
    Updated,
    Rejected,
}

impl SetOutcome {
    /// Parse the result string returned by `upsert_kv_data`.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "inserted" => Ok(SetOutcome::Inserted),
            "updated" => Ok(SetOutcome::Updated),
            "rejected" => Ok(SetOutcome::Rejected),
            other => Err(Error::UnexpectedResult(format!(
                "unknown upsert result {:?}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SetOutcome::Inserted => "inserted",
            SetOutcome::Updated => "updated",
            SetOutcome::Rejected => "rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_outcome_parse() {
        assert_eq!(SetOutcome::parse("inserted").unwrap(), SetOutcome::Inserted);
        assert_eq!(SetOutcome::parse("updated").unwrap(), SetOutcome::Updated);
        assert_eq!(SetOutcome::parse("rejected").unwrap(), SetOutcome::Rejected);
    }

    #[test]
    fn test_set_outcome_parse_unknown() {
        let err = SetOutcome::parse("exploded").unwrap_err();
        assert_eq!(err.code(), "UNEXPECTED_RESULT");
    }

    #[test]
    fn test_set_outcome_round_trip() {
        for outcome in [SetOutcome::Inserted, SetOutcome::Updated, SetOutcome::Rejected] {
            assert_eq!(SetOutcome::parse(outcome.as_str()).unwrap(), outcome);
        }
    }

    #[test]
    fn test_condition_builder() {
        let ts = Utc::now();
        let cond = MgetCondition::new("k1").modified_at(ts);
        assert_eq!(cond.key, "k1");
        assert_eq!(cond.modified_at, Some(ts));
    }

    #[test]
    fn test_batch_record_defaults() {
        let rec = BatchRecord::new("k1", "v1");
        assert!(rec.modified_at.is_none());
    }
}
