//! Closed vocabularies for the `type`, `status` and `priority` fields.
//!
//! Values outside the vocabulary survive a read as `Unspecified(raw)` and are
//! written back verbatim, so collections saved by older clients stay intact.

use serde::{Deserialize, Serialize};

/// Classification shared by an entry's `type` and `status` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Incoming,
    Outgoing,
    Forwarded,
    Resolved,
    Pending,
    /// Legacy free text that is not part of the vocabulary.
    Unspecified(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Incoming => "incoming",
            Category::Outgoing => "outgoing",
            Category::Forwarded => "forwarded",
            Category::Resolved => "resolved",
            Category::Pending => "pending",
            Category::Unspecified(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "incoming" => Some(Category::Incoming),
            "outgoing" => Some(Category::Outgoing),
            "forwarded" => Some(Category::Forwarded),
            "resolved" => Some(Category::Resolved),
            "pending" => Some(Category::Pending),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unspecified(_))
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_str(&s).unwrap_or(Category::Unspecified(s))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from_str(s).unwrap_or_else(|| Category::Unspecified(s.to_string()))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unspecified(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Urgency of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
    /// Legacy free text that is not part of the vocabulary.
    Unspecified(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Unspecified(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Unspecified(_))
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from_str(&s).unwrap_or(Priority::Unspecified(s))
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        Priority::from_str(s).unwrap_or_else(|| Priority::Unspecified(s.to_string()))
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Unspecified(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
