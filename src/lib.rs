//! Babycare Advisor - personalized infant care advice service
//!
//! This library turns a small baby profile into nutrition, activity,
//! development and exercise advice, and answers free-text questions from a
//! fixed keyword table. Results are kept in a short-lived session store for
//! the results view.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use actix_web::web;
use std::sync::Arc;

// Re-export commonly used types
pub use crate::core::{Advisor, QaEngine};
pub use errors::AppError;
pub use models::{Assessment, BabyProfile, QaAnswer, Recommendations};
pub use routes::AppState;

/// Build the shared application state from settings
pub fn build_state(settings: &crate::config::Settings) -> Result<AppState, regex::Error> {
    Ok(AppState {
        advisor: Advisor::new((&settings.assessment).into()),
        qa: QaEngine::new()?,
        sessions: Arc::new(services::SessionStore::new(
            settings.session.max_entries,
            settings.session.ttl_secs,
        )),
        advice: settings.advice.clone(),
    })
}

/// Register state, extractor error handlers and routes on an app
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::JsonConfig::default().error_handler(errors::handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(errors::handle_path_error))
            .configure(routes::configure_routes);
    }
}
