//! Portal member model.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A portal member as returned by the sharing API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier within the portal.
    pub username: String,

    pub email: Option<String>,

    /// Organizational category labels, e.g. "/Categories/1-year Researcher".
    /// Absent on members that were never categorized.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Account creation time in epoch milliseconds. Some legacy accounts
    /// carry no timestamp; those are never selected for retirement.
    pub created: Option<i64>,
}

impl Member {
    /// The creation time as a UTC timestamp, if the portal recorded one.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// The member's email, if set and non-empty.
    pub fn email_tag(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: Option<&str>) -> Member {
        Member {
            username: "jdoe".to_string(),
            email: email.map(String::from),
            categories: vec![],
            created: Some(1_700_000_000_000),
        }
    }

    #[test]
    fn test_created_at_conversion() {
        let m = member(None);
        let created = m.created_at().unwrap();
        assert_eq!(created.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_created_at_absent() {
        let mut m = member(None);
        m.created = None;
        assert!(m.created_at().is_none());
    }

    #[test]
    fn test_email_tag_filters_empty() {
        assert_eq!(member(Some("jdoe@example.com")).email_tag(), Some("jdoe@example.com"));
        assert_eq!(member(Some("  ")).email_tag(), None);
        assert_eq!(member(Some("")).email_tag(), None);
        assert_eq!(member(None).email_tag(), None);
    }
}
