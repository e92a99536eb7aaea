use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Required fields, in the order they are checked and asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPlanField {
    TargetUsers,
    Budget,
    Timeline,
    PreferredSection,
}

impl MediaPlanField {
    pub const ALL: [MediaPlanField; 4] = [
        MediaPlanField::TargetUsers,
        MediaPlanField::Budget,
        MediaPlanField::Timeline,
        MediaPlanField::PreferredSection,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            MediaPlanField::TargetUsers => "target_users",
            MediaPlanField::Budget => "budget",
            MediaPlanField::Timeline => "timeline",
            MediaPlanField::PreferredSection => "preferred_section",
        }
    }

    /// Numbered question asked when the field is missing. The number is the
    /// field's fixed position, not its rank among the missing fields.
    pub const fn question(&self) -> &'static str {
        match self {
            MediaPlanField::TargetUsers => "1. Quel type d'utilisateurs souhaitez-vous cibler?",
            MediaPlanField::Budget => "2. Quel est votre budget marketing?",
            MediaPlanField::Timeline => "3. Quel est votre calendrier marketing?",
            MediaPlanField::PreferredSection => {
                "4. Avez-vous une section de préférence (Sports, Actualité, Politique, etc.)?"
            }
        }
    }
}

/// Input for `create_plan_media`. Every field may be omitted by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MediaPlanRequest {
    /// The type of users to target.
    #[serde(default)]
    pub target_users: Option<String>,
    /// The marketing budget. Always in Canadian dollars.
    #[serde(default)]
    pub budget: Option<String>,
    /// The marketing timeline.
    #[serde(default)]
    pub timeline: Option<String>,
    /// Preferred section (Sports, Actualité, Politique, etc.).
    #[serde(default)]
    pub preferred_section: Option<String>,
}

/// A complete media plan, echoing the request verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MediaPlan {
    pub target_users: String,
    pub budget: String,
    pub timeline: String,
    pub preferred_section: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaPlanError {
    #[error("Informations requises manquantes.")]
    MissingFields(Vec<MediaPlanField>),
}

impl MediaPlanError {
    /// Instruction block listing one question per missing field.
    pub fn instruction(&self) -> String {
        match self {
            MediaPlanError::MissingFields(fields) => {
                let questions = fields
                    .iter()
                    .map(MediaPlanField::question)
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("Veuillez répondre aux questions suivantes :\n{questions}")
            }
        }
    }
}

impl MediaPlanRequest {
    fn field(&self, field: MediaPlanField) -> Option<&str> {
        let value = match field {
            MediaPlanField::TargetUsers => &self.target_users,
            MediaPlanField::Budget => &self.budget,
            MediaPlanField::Timeline => &self.timeline,
            MediaPlanField::PreferredSection => &self.preferred_section,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Fields that are absent or empty, in checking order.
    pub fn missing_fields(&self) -> Vec<MediaPlanField> {
        MediaPlanField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_none())
            .collect()
    }

    /// Check presence of every field and build the plan. No value is normalized.
    pub fn validate(self) -> Result<MediaPlan, MediaPlanError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(MediaPlanError::MissingFields(missing));
        }
        Ok(MediaPlan {
            target_users: self.target_users.unwrap_or_default(),
            budget: self.budget.unwrap_or_default(),
            timeline: self.timeline.unwrap_or_default(),
            preferred_section: self.preferred_section.unwrap_or_default(),
        })
    }
}
