use crate::api::CrmApi;
use crate::domain::tab::Tab;
use crate::models::page::Page;
use crate::services::ServiceResult;
use crate::services::{clients, deals};

/// Makes `tab` the visible panel and reloads its list.
pub async fn show_tab<A>(api: &A, page: &mut Page, tab: Tab) -> ServiceResult<()>
where
    A: CrmApi + ?Sized,
{
    page.tabs.activate(tab);

    match tab {
        Tab::Clients => clients::load_clients(api, page).await?,
        Tab::Deals => deals::load_deals(api, page).await?,
    };

    Ok(())
}
