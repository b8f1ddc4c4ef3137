use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{NamerError, Result};

// ========================================
// Form input and parsed output
// ========================================

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Fashion,
    Food,
    Health,
    Finance,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tech,
        Category::Fashion,
        Category::Food,
        Category::Health,
        Category::Finance,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Fashion => "Fashion",
            Category::Food => "Food",
            Category::Health => "Health",
            Category::Finance => "Finance",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let t = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| format!("unknown category '{}'", t))
    }
}

/// One form submission. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub business_type: String,
    pub category: Category,
}

impl GenerationRequest {
    pub fn new(business_type: &str, category: Category) -> Result<Self> {
        let business_type = business_type.trim();
        if business_type.is_empty() {
            return Err(NamerError::EmptyBusinessType);
        }
        Ok(Self { business_type: business_type.to_string(), category })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub tagline: String,
    pub description: String,
}

// ========================================
// Chat completion wire types
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instruction {
    pub system: String,
    pub user: String,
}

impl Instruction {
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage { role: Role::System, content: self.system.clone() },
            ChatMessage { role: Role::User, content: self.user.clone() },
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tx {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Tx {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), timestamp: Utc::now() }
    }
}

/// What was sent to the provider, as saved to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub transaction: Tx,
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

/// What came back, as saved to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub transaction: Tx,
    pub raw: String,
    pub records: Vec<NameRecord>,
    pub dropped_blocks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_rejects_blank_business_type() {
        assert!(matches!(
            GenerationRequest::new("   ", Category::Food),
            Err(NamerError::EmptyBusinessType)
        ));
    }

    #[test]
    fn request_trims_business_type() {
        let req = GenerationRequest::new("  artisan bakery ", Category::Food).unwrap();
        assert_eq!(req.business_type, "artisan bakery");
        assert_eq!(req.category, Category::Food);
    }

    #[test]
    fn category_from_str_ignores_case() {
        assert_eq!("finance".parse::<Category>().unwrap(), Category::Finance);
        assert_eq!(" HEALTH ".parse::<Category>().unwrap(), Category::Health);
        assert!("gaming".parse::<Category>().is_err());
    }

    #[test]
    fn messages_are_role_tagged_in_order() {
        let ins = Instruction { system: "sys".into(), user: "usr".into() };
        let json = serde_json::to_value(ins.messages()).unwrap();
        assert_eq!(json[0]["role"], "system");
        assert_eq!(json[1]["role"], "user");
        assert_eq!(json[1]["content"], "usr");
    }
}
