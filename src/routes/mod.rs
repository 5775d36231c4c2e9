//! Actix-web handlers applying UI actions to the page.
//!
//! Every mutating handler follows POST/redirect/GET: it runs a service
//! function on the visitor's page, turns its outcome into a flash message and
//! redirects to `/`.

use std::sync::Arc;

use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, Level};
use tera::{Context, Tera};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::page::Page;
use crate::services::ServiceError;
use crate::services::clients as client_service;
use crate::state::AppState;

pub mod clients;
pub mod deals;
pub mod main;
pub mod tabs;

/// Registers every UI route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::health)
        .service(tabs::show_tab)
        .service(clients::show_client_form)
        .service(clients::hide_client_form)
        .service(clients::create_client)
        .service(clients::reload_clients)
        .service(deals::show_deal_form)
        .service(deals::hide_deal_form)
        .service(deals::create_deal)
        .service(deals::reload_deals)
        .service(deals::show_deal);
}

const VISITOR_KEY: &str = "visitor_id";

/// Page of the visitor behind `session`.
///
/// A session without a visitor id is given a fresh one. A fresh page starts
/// on the clients tab, so its client list is fetched right away.
pub async fn visitor_page(
    session: &Session,
    state: &AppState,
) -> actix_web::Result<Arc<Mutex<Page>>> {
    let visitor = match session.get::<Uuid>(VISITOR_KEY)? {
        Some(visitor) => visitor,
        None => {
            let visitor = Uuid::new_v4();
            session.insert(VISITOR_KEY, visitor)?;
            visitor
        }
    };

    let (page, created) = state.visitor_page(visitor).await;
    if created {
        log::info!("New visitor {visitor}");
        let mut guard = page.lock().await;
        if let Err(err) = client_service::load_clients(state.api.as_ref(), &mut guard).await {
            log::warn!("Initial client load failed: {err}");
        }
    }

    Ok(page)
}

/// Maps a flash level to the CSS modifier of the alert banner.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Reports a service failure to the user: validation problems as warnings,
/// failed requests as errors.
pub fn flash_service_error(err: &ServiceError) {
    match err {
        ServiceError::Form(_) => FlashMessage::warning(err.to_string()).send(),
        ServiceError::Api(_) => FlashMessage::error(err.to_string()).send(),
    }
}
