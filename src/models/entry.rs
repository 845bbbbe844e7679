//! Daak entry model matching the persisted record layout.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Category, Priority};
use crate::errors::AppError;

/// A single piece of correspondence tracked in the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub date: String,
    pub subject: String,
    pub sender: String,
    pub receiver: String,
    #[serde(rename = "type")]
    pub kind: Category,
    pub status: Category,
    pub priority: Priority,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Stored entries may carry `"description": null`; read it as absent.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    /// Names of the required fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("id", self.id.is_empty()),
            ("date", self.date.is_empty()),
            ("subject", self.subject.is_empty()),
            ("sender", self.sender.is_empty()),
            ("receiver", self.receiver.is_empty()),
            ("type", self.kind.is_empty()),
            ("status", self.status.is_empty()),
            ("priority", self.priority.is_empty()),
        ];

        checks
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
    }

    /// Check that the entry may be appended to the register.
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in all required fields. Missing: {}",
                missing.join(", ")
            )));
        }

        if !self.kind.is_known() {
            return Err(AppError::Validation(format!(
                "Unsupported type '{}'",
                self.kind.as_str()
            )));
        }
        if !self.status.is_known() {
            return Err(AppError::Validation(format!(
                "Unsupported status '{}'",
                self.status.as_str()
            )));
        }
        if !self.priority.is_known() {
            return Err(AppError::Validation(format!(
                "Unsupported priority '{}'",
                self.priority.as_str()
            )));
        }

        Ok(())
    }
}

/// Request body for adding a new entry.
///
/// Every field defaults to empty so that an incomplete form reaches validation
/// instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateEntryRequest> for Entry {
    fn from(request: CreateEntryRequest) -> Self {
        Entry {
            id: request.id,
            date: request.date,
            subject: request.subject,
            sender: request.sender,
            receiver: request.receiver,
            kind: request.kind.to_lowercase().into(),
            status: request.status.to_lowercase().into(),
            priority: request.priority.to_lowercase().into(),
            description: request.description.unwrap_or_default(),
        }
    }
}
