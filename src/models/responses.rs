use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Assessment, BabyProfile, Recommendations};

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    pub assessment: Assessment,
    pub recommendations: Recommendations,
}

/// Stored input and output records for the results view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    #[serde(rename = "babyData")]
    pub baby_data: BabyProfile,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularQuestionsResponse {
    pub questions: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
