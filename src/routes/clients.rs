use actix_session::Session;
use actix_web::{HttpResponse, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::client::AddClientForm;
use crate::routes::{flash_service_error, redirect, visitor_page};
use crate::services::clients as client_service;
use crate::state::AppState;

#[post("/clients/form/show")]
pub async fn show_client_form(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    client_service::show_client_form(&mut *page.lock().await);
    Ok(redirect("/"))
}

#[post("/clients/form/hide")]
pub async fn hide_client_form(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    client_service::hide_client_form(&mut *page.lock().await);
    Ok(redirect("/"))
}

#[post("/clients")]
pub async fn create_client(
    session: Session,
    state: web::Data<AppState>,
    web::Form(form): web::Form<AddClientForm>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    match client_service::create_client(state.api.as_ref(), &mut page, form).await {
        Ok(_) => FlashMessage::success("Client created!".to_string()).send(),
        Err(err) => flash_service_error(&err),
    }
    Ok(redirect("/"))
}

#[post("/clients/reload")]
pub async fn reload_clients(
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    if let Err(err) = client_service::load_clients(state.api.as_ref(), &mut page).await {
        flash_service_error(&err);
    }
    Ok(redirect("/"))
}
