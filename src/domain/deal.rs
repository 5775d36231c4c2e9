use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, DealId, TourOperator};

/// Lifecycle state of a deal.
///
/// Values the UI does not know are kept verbatim in [`DealStatus::Other`] so
/// they can still be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealStatus {
    Draft,
    Active,
    Paid,
    Cancelled,
    Completed,
    Other(String),
}

impl DealStatus {
    /// Raw wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label shown in the deals list.
    pub fn label(&self) -> &str {
        match self {
            Self::Draft => "📝 Draft",
            Self::Active => "🟢 Active",
            Self::Paid => "💰 Paid",
            Self::Cancelled => "❌ Cancelled",
            Self::Completed => "✅ Completed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for DealStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "active" => Self::Active,
            "paid" => Self::Paid,
            "cancelled" => Self::Cancelled,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<DealStatus> for String {
    fn from(value: DealStatus) -> Self {
        match value {
            DealStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Deal record as returned by `GET /deals`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub id: DealId,
    pub client_id: ClientId,
    pub deal_amount: f64,
    pub commission_percent: f64,
    /// Computed by the backend from amount and percent.
    pub commission_amount: f64,
    pub tour_operator: String,
    pub deal_date: NaiveDate,
    pub payment_due_date: NaiveDate,
    pub status: DealStatus,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload of `POST /deals`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewDeal {
    pub client_id: ClientId,
    pub deal_amount: f64,
    pub commission_percent: f64,
    pub tour_operator: TourOperator,
    pub deal_date: NaiveDate,
    pub payment_due_date: NaiveDate,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_statuses_map_to_labels() {
        assert_eq!(DealStatus::from("paid".to_string()).label(), "💰 Paid");
        assert_eq!(DealStatus::from("draft".to_string()).label(), "📝 Draft");
        assert_eq!(DealStatus::from("completed".to_string()), DealStatus::Completed);
    }

    #[test]
    fn unknown_status_passes_through() {
        let status = DealStatus::from("foo".to_string());
        assert_eq!(status, DealStatus::Other("foo".to_string()));
        assert_eq!(status.label(), "foo");
        assert_eq!(String::from(status), "foo");
    }

    #[test]
    fn decodes_deal_with_unknown_status() {
        let deal: Deal = serde_json::from_value(json!({
            "id": 1,
            "client_id": 2,
            "deal_amount": 150000.0,
            "commission_percent": 10.0,
            "commission_amount": 15000.0,
            "tour_operator": "Pegas",
            "deal_date": "2024-05-01",
            "payment_due_date": "2024-05-20",
            "status": "on_hold",
            "description": null,
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": null
        }))
        .unwrap();

        assert_eq!(deal.status.as_str(), "on_hold");
        assert_eq!(deal.deal_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn new_deal_serializes_numbers_and_iso_dates() {
        let new_deal = NewDeal {
            client_id: ClientId::new(2).unwrap(),
            deal_amount: 1500.5,
            commission_percent: 12.0,
            tour_operator: TourOperator::new("Anex").unwrap(),
            deal_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            payment_due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            description: None,
        };

        let value = serde_json::to_value(&new_deal).unwrap();
        assert!(value["client_id"].is_i64());
        assert!(value["deal_amount"].is_f64());
        assert_eq!(value["deal_date"], "2024-06-01");
        assert!(value["description"].is_null());
    }
}
