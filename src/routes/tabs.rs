use actix_session::Session;
use actix_web::{HttpResponse, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::domain::tab::Tab;
use crate::routes::{flash_service_error, redirect, visitor_page};
use crate::services::tabs as tab_service;
use crate::state::AppState;

#[post("/tabs/{tab}")]
pub async fn show_tab(
    tab: web::Path<String>,
    session: Session,
    state: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    let Ok(tab) = tab.parse::<Tab>() else {
        FlashMessage::error(format!("Unknown tab: {tab}")).send();
        return Ok(redirect("/"));
    };

    let page = visitor_page(&session, &state).await?;
    let mut page = page.lock().await;
    if let Err(err) = tab_service::show_tab(state.api.as_ref(), &mut page, tab).await {
        flash_service_error(&err);
    }

    Ok(redirect("/"))
}
