//! HTTP handlers.

use actix_web::{web, HttpResponse, Responder};
use isomap_core::token::{ErrorResponse, TokenResponse, TOKEN_ROUTE};
use tracing::{debug, error};

/// Token shared with every worker.
#[derive(Debug, Clone)]
pub struct TokenState {
    token: Option<String>,
}

impl TokenState {
    /// An empty token counts as unset.
    pub fn new(token: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }
}

/// Register the routes on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig, state: TokenState) {
    cfg.app_data(web::Data::new(state))
        .route("/", web::get().to(index))
        .route(TOKEN_ROUTE, web::get().to(mapbox_token));
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("isomap token server is running")
}

async fn mapbox_token(state: web::Data<TokenState>) -> HttpResponse {
    match &state.token {
        Some(token) => {
            debug!("serving mapbox token");
            HttpResponse::Ok().json(TokenResponse {
                token: token.clone(),
            })
        }
        None => {
            error!("MAPBOX_TOKEN is not configured");
            HttpResponse::InternalServerError().json(ErrorResponse::missing_token())
        }
    }
}
