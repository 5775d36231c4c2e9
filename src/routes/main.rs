use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde_json::json;
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::models::page::Page;
use crate::routes::{alert_level_to_str, render_template, visitor_page};
use crate::state::AppState;

/// Template context of the whole page.
pub fn page_context(page: &Page, currency_symbol: &str) -> Context {
    let mut context = Context::new();
    context.insert("page", page);
    context.insert("tabs", &page.tabs.panels());
    context.insert("active_tab", page.tabs.active().as_ref());
    context.insert("clients", &page.clients);
    context.insert("deals", &page.deals);
    context.insert("currency_symbol", currency_symbol);
    context
}

#[get("/")]
pub async fn show_index(
    session: Session,
    state: web::Data<AppState>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> actix_web::Result<HttpResponse> {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let page = visitor_page(&session, &state).await?;
    let page = page.lock().await;
    let mut context = page_context(&page, &server_config.currency_symbol);
    context.insert("alerts", &alerts);

    Ok(render_template(&tera, "main/index.html", &context))
}

/// Liveness of this front-end plus the backend's own health report.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    match state.api.health().await {
        Ok(report) => HttpResponse::Ok().json(json!({
            "frontend": "ok",
            "backend": report,
        })),
        Err(err) => {
            log::error!("Backend health check failed: {err}");
            HttpResponse::BadGateway().json(json!({
                "frontend": "ok",
                "backend_error": err.to_string(),
            }))
        }
    }
}
