//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operations recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Post,
    User,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Post => write!(f, "Post"),
            EntityType::User => write!(f, "User"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Short id of the affected entity
    pub entity_id: String,

    /// Human-readable label (post title, user handle)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Handle of the user who acted, absent for anonymous actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// Entity before a delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity after a create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            actor: None,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Entry for a deleted entity
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            actor: None,
            before: serde_json::to_value(entity).ok(),
            after: None,
        }
    }

    /// Attach the acting user's handle
    pub fn by(mut self, actor: Option<&str>) -> Self {
        self.actor = actor.map(str::to_string);
        self
    }

    /// One-line rendering for `archive history`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        match &self.actor {
            Some(actor) => output.push_str(&format!(" by {}", actor)),
            None if self.entity_type == EntityType::Post => output.push_str(" by Anonymous"),
            None => {}
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Post,
            "post-1a2b3c4d",
            Some("Rivers".to_string()),
            &json!({"title": "Rivers"}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!({"title": "Rivers"})));
    }

    #[test]
    fn test_delete_entry_keeps_before() {
        let entry = AuditEntry::delete(EntityType::Post, "post-1", None, &json!({"views": 3}));
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.after.is_none());
        assert!(entry.before.is_some());
    }

    #[test]
    fn test_human_readable_names_actor() {
        let entry = AuditEntry::create(
            EntityType::Post,
            "post-1a2b3c4d",
            Some("Rivers".to_string()),
            &json!({}),
        );
        assert!(entry.format_human_readable().ends_with("(Rivers) by Anonymous"));

        let entry = entry.by(Some("jo"));
        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Post post-1a2b3c4d"));
        assert!(formatted.ends_with("by jo"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(EntityType::User, "usr-1", None, &json!({}));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"user\""));
        assert!(!json.contains("actor"));
        assert!(!json.contains("before"));
    }
}
