// Route exports
pub mod advice;
pub mod qa;

use actix_web::web;
use std::sync::Arc;

use crate::config::AdviceSettings;
use crate::core::{Advisor, QaEngine};
use crate::services::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub advisor: Advisor,
    pub qa: QaEngine,
    pub sessions: Arc<SessionStore>,
    pub advice: AdviceSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(advice::configure)
            .configure(qa::configure),
    );
}
