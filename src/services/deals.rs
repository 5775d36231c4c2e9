use crate::api::CrmApi;
use crate::domain::deal::{Deal, NewDeal};
use crate::domain::types::DealId;
use crate::dto::ListView;
use crate::dto::client::{ClientCard, client_options};
use crate::dto::deal::{DealCard, DealDetails, deal_list_view};
use crate::forms::deal::AddDealForm;
use crate::models::page::Page;
use crate::services::ServiceResult;

/// Refills the client dropdown from a fresh client list and reveals the form.
///
/// The form opens even when the clients cannot be fetched; the dropdown then
/// only holds its placeholder and the error is returned.
pub async fn show_deal_form<A>(api: &A, page: &mut Page) -> ServiceResult<()>
where
    A: CrmApi + ?Sized,
{
    page.client_options.clear();

    let result = match api.list_clients().await {
        Ok(clients) => {
            page.client_options = client_options(&clients);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to load clients for deal form: {err}");
            Err(err.into())
        }
    };

    page.deal_form.show();
    result
}

/// Hides the create-deal form and clears all its fields.
pub fn hide_deal_form(page: &mut Page) {
    page.deal_form.hide();
}

pub async fn create_deal<A>(api: &A, page: &mut Page, form: AddDealForm) -> ServiceResult<Deal>
where
    A: CrmApi + ?Sized,
{
    page.deal_form.values = form.clone();

    let new_deal = NewDeal::try_from(form).inspect_err(|err| {
        log::warn!("Rejected deal form: {err}");
    })?;

    let deal = api.create_deal(&new_deal).await?;
    log::info!("Created deal {} for client {}", deal.id, deal.client_id);

    hide_deal_form(page);
    if let Err(err) = load_deals(api, page).await {
        log::error!("Failed to reload deals after create: {err}");
    }

    Ok(deal)
}

/// Refetches every deal and replaces the list contents.
pub async fn load_deals<A>(api: &A, page: &mut Page) -> ServiceResult<usize>
where
    A: CrmApi + ?Sized,
{
    page.deals = ListView::Loading;

    match api.list_deals().await {
        Ok(deals) => {
            page.deals = deal_list_view(&deals);
            Ok(deals.len())
        }
        Err(err) => {
            log::error!("Failed to load deals: {err}");
            page.deals = ListView::Failed;
            Err(err.into())
        }
    }
}

/// Fetches one deal together with its client.
///
/// The deal is still returned when its client cannot be fetched.
pub async fn deal_details<A>(api: &A, id: DealId) -> ServiceResult<DealDetails>
where
    A: CrmApi + ?Sized,
{
    let deal = api.get_deal(id).await?;

    let client = match api.get_client(deal.client_id).await {
        Ok(client) => Some(ClientCard::from(&client)),
        Err(err) => {
            log::warn!("Failed to load client {} of deal {id}: {err}", deal.client_id);
            None
        }
    };

    Ok(DealDetails {
        deal: DealCard::from(&deal),
        client,
    })
}
