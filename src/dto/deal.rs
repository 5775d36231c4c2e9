use serde::Serialize;

use crate::domain::deal::Deal;
use crate::dto::ListView;
use crate::dto::client::ClientCard;
use crate::format::{format_amount, format_date, format_percent};

/// One entry of the deals list. Money values are formatted without the
/// currency symbol; templates append the configured one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DealCard {
    pub id: i32,
    pub client_id: i32,
    pub amount: String,
    pub commission_amount: String,
    pub commission_percent: String,
    pub tour_operator: String,
    pub deal_date: String,
    pub payment_due_date: String,
    pub status: String,
    pub status_label: String,
    pub description: Option<String>,
    pub created: Option<String>,
}

impl From<&Deal> for DealCard {
    fn from(deal: &Deal) -> Self {
        Self {
            id: deal.id.get(),
            client_id: deal.client_id.get(),
            amount: format_amount(deal.deal_amount),
            commission_amount: format_amount(deal.commission_amount),
            commission_percent: format_percent(deal.commission_percent),
            tour_operator: deal.tour_operator.clone(),
            deal_date: deal.deal_date.to_string(),
            payment_due_date: deal.payment_due_date.to_string(),
            status: deal.status.as_str().to_string(),
            status_label: deal.status.label().to_string(),
            description: deal.description.clone().filter(|s| !s.is_empty()),
            created: deal.created_at.as_ref().map(format_date),
        }
    }
}

/// A single deal with the client it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DealDetails {
    pub deal: DealCard,
    /// Absent when the client could not be fetched.
    pub client: Option<ClientCard>,
}

pub fn deal_list_view(deals: &[Deal]) -> ListView<DealCard> {
    ListView::from_items(deals.iter().map(DealCard::from).collect())
}
