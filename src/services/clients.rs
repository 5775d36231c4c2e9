use crate::api::CrmApi;
use crate::domain::client::{Client, NewClient};
use crate::dto::ListView;
use crate::dto::client::client_list_view;
use crate::forms::client::AddClientForm;
use crate::models::page::Page;
use crate::services::ServiceResult;

pub fn show_client_form(page: &mut Page) {
    page.client_form.show();
}

/// Hides the create-client form and clears its inputs.
pub fn hide_client_form(page: &mut Page) {
    page.client_form.hide();
}

/// Validates the form and creates the client, then reloads the list.
///
/// On failure the form keeps what the user typed.
pub async fn create_client<A>(
    api: &A,
    page: &mut Page,
    form: AddClientForm,
) -> ServiceResult<Client>
where
    A: CrmApi + ?Sized,
{
    page.client_form.values = form.clone();

    let new_client = NewClient::try_from(form).inspect_err(|err| {
        log::warn!("Rejected client form: {err}");
    })?;

    let client = api.create_client(&new_client).await?;
    log::info!("Created client {}", client.id);

    hide_client_form(page);
    if let Err(err) = load_clients(api, page).await {
        log::error!("Failed to reload clients after create: {err}");
    }

    Ok(client)
}

/// Refetches every client and replaces the list contents.
///
/// Returns the number of clients shown. A failed fetch leaves the list in the
/// [`ListView::Failed`] state.
pub async fn load_clients<A>(api: &A, page: &mut Page) -> ServiceResult<usize>
where
    A: CrmApi + ?Sized,
{
    page.clients = ListView::Loading;

    match api.list_clients().await {
        Ok(clients) => {
            page.clients = client_list_view(&clients);
            Ok(clients.len())
        }
        Err(err) => {
            log::error!("Failed to load clients: {err}");
            page.clients = ListView::Failed;
            Err(err.into())
        }
    }
}
