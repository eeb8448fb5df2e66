use actix_web::{http::header, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::core::{render_report, report_filename, share_text};
use crate::errors::AppError;
use crate::models::{
    AgeQuery, BabyProfile, HealthResponse, RecommendationRequest, RecommendationResponse,
    Recommendations, SessionResponse,
};
use crate::routes::AppState;
use crate::services::SessionError;

/// Configure advice and results-view routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(create_recommendations))
        .route("/recommendations/age/{age}", web::get().to(recommendations_for_age))
        .route("/sessions/{session_id}", web::get().to(get_session))
        .route("/sessions/{session_id}", web::delete().to(discard_session))
        .route("/sessions/{session_id}/share", web::get().to(share_session))
        .route("/sessions/{session_id}/report", web::get().to(download_report));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Generate recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "age": 12,
///   "gender": "male|female",
///   "weight": 10.0,
///   "height": 75.0,
///   "feedingMethod": "breastfeeding|formula|mixed",
///   "sleepHours": 12,
///   "healthConditions": "",
///   "allergies": "",
///   "notes": ""
/// }
/// ```
async fn create_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> Result<HttpResponse, AppError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return Err(errors.into());
    }

    let profile = BabyProfile::from(req.into_inner());
    let assessment = state.advisor.assess(&profile);
    let recommendations = state.advisor.render(&profile, &assessment);

    let delay = state.advice.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let session_id = Uuid::new_v4();
    state
        .sessions
        .save(session_id, &profile, &recommendations)
        .await?;

    tracing::info!(
        "Generated recommendations for {}-month profile (session {}, stage {:?})",
        profile.age,
        session_id,
        assessment.age_stage
    );

    Ok(HttpResponse::Ok().json(RecommendationResponse {
        session_id,
        assessment,
        recommendations,
    }))
}

/// Age-only recommendations endpoint
///
/// GET /api/v1/recommendations/age/{age}
async fn recommendations_for_age(
    state: web::Data<AppState>,
    path: web::Path<AgeQuery>,
) -> Result<HttpResponse, AppError> {
    if let Err(errors) = path.validate() {
        tracing::info!("Validation failed for age-only request: {:?}", errors);
        return Err(errors.into());
    }

    Ok(HttpResponse::Ok().json(state.advisor.recommend_for_age(path.age)))
}

/// Load a session for the results view
///
/// An unreadable session is discarded and reported the same as a missing
/// one, so the client goes back to the form.
async fn load_session(
    state: &AppState,
    session_id: Uuid,
) -> Result<(BabyProfile, Recommendations), AppError> {
    match state.sessions.load(session_id).await {
        Ok(records) => Ok(records),
        Err(SessionError::Missing(_)) => Err(AppError::NotFound(format!(
            "No stored results for session {}",
            session_id
        ))),
        Err(e) => {
            tracing::warn!("Discarding unreadable session {}: {}", session_id, e);
            state.sessions.discard(session_id).await;
            Err(AppError::NotFound(format!(
                "No stored results for session {}",
                session_id
            )))
        }
    }
}

/// GET /api/v1/sessions/{session_id}
async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let (baby_data, recommendations) = load_session(&state, session_id).await?;

    Ok(HttpResponse::Ok().json(SessionResponse {
        session_id,
        baby_data,
        recommendations,
    }))
}

/// DELETE /api/v1/sessions/{session_id}
async fn discard_session(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    state.sessions.discard(path.into_inner()).await;
    HttpResponse::NoContent().finish()
}

/// GET /api/v1/sessions/{session_id}/share
async fn share_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let (_, recommendations) = load_session(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(share_text(&recommendations)))
}

/// GET /api/v1/sessions/{session_id}/report
///
/// Plain-text report served as an attachment.
async fn download_report(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let (profile, recommendations) = load_session(&state, path.into_inner()).await?;

    let now = chrono::Utc::now();
    let filename = report_filename(profile.age, now.date_naive());
    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&filename)
    );

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((header::CONTENT_DISPOSITION, disposition))
        .body(render_report(&profile, &recommendations, now)))
}
