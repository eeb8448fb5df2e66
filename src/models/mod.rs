// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeStage, Assessment, AssessmentThresholds, BabyProfile, FeedingMethod, Gender, HealthFlags,
    QaAnswer, Recommendations, SleepStatus, WeightStatus,
};
pub use requests::{AgeQuery, AskRequest, RecommendationRequest};
pub use responses::{
    ErrorResponse, HealthResponse, PopularQuestionsResponse, RecommendationResponse,
    SessionResponse,
};
