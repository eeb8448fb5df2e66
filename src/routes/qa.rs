use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::popular_questions;
use crate::errors::AppError;
use crate::models::{AskRequest, PopularQuestionsResponse};
use crate::routes::AppState;

/// Configure keyword Q&A routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/qa/ask", web::post().to(ask))
        .route("/qa/popular", web::get().to(popular));
}

/// Ask endpoint
///
/// POST /api/v1/qa/ask
///
/// Request body:
/// ```json
/// { "question": "6个月宝宝可以吃什么辅食？" }
/// ```
async fn ask(
    state: web::Data<AppState>,
    req: web::Json<AskRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let answer = {
        let mut rng = rand::thread_rng();
        state.qa.answer(&req.question, &mut rng)
    };

    let delay = state.advice.qa_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    tracing::info!("Answered question in category {}", answer.category);

    Ok(HttpResponse::Ok().json(answer))
}

/// GET /api/v1/qa/popular
async fn popular() -> impl Responder {
    HttpResponse::Ok().json(PopularQuestionsResponse {
        questions: popular_questions(),
    })
}
