use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{BabyProfile, FeedingMethod, Gender};

/// Request to generate recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(range(min = 1, max = 60))]
    pub age: u8,
    pub gender: Gender,
    #[validate(range(min = 1.0, max = 50.0))]
    pub weight: f64,
    #[validate(range(min = 30.0, max = 150.0))]
    pub height: f64,
    #[serde(alias = "feeding_method", rename = "feedingMethod")]
    pub feeding_method: FeedingMethod,
    #[validate(range(min = 8.0, max = 18.0))]
    #[serde(alias = "sleep_hours", rename = "sleepHours")]
    pub sleep_hours: f64,
    #[validate(length(max = 500))]
    #[serde(alias = "health_conditions", rename = "healthConditions", default)]
    pub health_conditions: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub allergies: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub notes: String,
}

impl From<RecommendationRequest> for BabyProfile {
    fn from(req: RecommendationRequest) -> Self {
        BabyProfile {
            age: req.age,
            gender: req.gender,
            weight: req.weight,
            height: req.height,
            feeding_method: req.feeding_method,
            sleep_hours: req.sleep_hours,
            health_conditions: req.health_conditions,
            allergies: req.allergies,
            notes: req.notes,
        }
    }
}

/// Age segment of the age-only recommendations path
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AgeQuery {
    #[validate(range(min = 1, max = 60))]
    pub age: u8,
}

/// Request to ask the keyword Q&A a question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(custom(function = "validate_question"))]
    pub question: String,
}

fn validate_question(question: &str) -> Result<(), ValidationError> {
    let len = question.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::new("question_empty"));
    }
    if len > 200 {
        return Err(ValidationError::new("question_too_long"));
    }
    Ok(())
}
