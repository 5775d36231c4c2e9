use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::FlashMessage;
use tera::{Context, Tera};

use crate::domain::types::DealId;
use crate::forms::deal::AddDealForm;
use crate::models::config::ServerConfig;
use crate::routes::{flash_service_error, redirect, render_template, visitor_page};
use crate::services::deals as deal_service;
use crate::state::AppState;

#[post("/deals/form/show")]
pub async fn show_deal_form(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    if let Err(err) = deal_service::show_deal_form(state.api.as_ref(), &mut page).await {
        flash_service_error(&err);
    }
    Ok(redirect("/"))
}

#[post("/deals/form/hide")]
pub async fn hide_deal_form(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    deal_service::hide_deal_form(&mut *page.lock().await);
    Ok(redirect("/"))
}

#[post("/deals")]
pub async fn create_deal(
    session: Session,
    state: web::Data<AppState>,
    web::Form(form): web::Form<AddDealForm>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    match deal_service::create_deal(state.api.as_ref(), &mut page, form).await {
        Ok(_) => FlashMessage::success("Deal created!".to_string()).send(),
        Err(err) => flash_service_error(&err),
    }
    Ok(redirect("/"))
}

#[post("/deals/reload")]
pub async fn reload_deals(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    if let Err(err) = deal_service::load_deals(state.api.as_ref(), &mut page).await {
        flash_service_error(&err);
    }
    Ok(redirect("/"))
}

/// Read-only page of one deal and its client.
#[get("/deals/{deal_id}")]
pub async fn show_deal(
    deal_id: web::Path<i32>,
    state: web::Data<AppState>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let deal_id = deal_id.into_inner();
    let Ok(id) = DealId::new(deal_id) else {
        FlashMessage::error(format!("Unknown deal: {deal_id}")).send();
        return redirect("/");
    };

    match deal_service::deal_details(state.api.as_ref(), id).await {
        Ok(details) => {
            let mut context = Context::new();
            context.insert("deal", &details.deal);
            context.insert("client", &details.client);
            context.insert("currency_symbol", &server_config.currency_symbol);
            render_template(&tera, "deals/detail.html", &context)
        }
        Err(err) => {
            flash_service_error(&err);
            redirect("/")
        }
    }
}
