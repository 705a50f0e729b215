//! Team model

use chrono::{DateTime, Utc};
use jc_core::traits::{Entity, Id, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Team entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Id,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub name: String,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Team {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Identifiable for Team {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timestamped for Team {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Team {
    const COLLECTION: &'static str = "teams";
    const TYPE_NAME: &'static str = "Team";
}

/// Partial update for a team
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub name: Option<String>,
}

impl TeamPatch {
    pub fn apply(&self, team: &mut Team) {
        if let Some(name) = &self.name {
            team.name = name.clone();
        }
    }
}
