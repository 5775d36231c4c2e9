//! Client list items and deal-form dropdown options.

use serde::Serialize;

use crate::domain::client::Client;
use crate::dto::ListView;
use crate::format::format_date;

/// One entry of the clients list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientCard {
    pub id: i32,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created: Option<String>,
}

impl From<&Client> for ClientCard {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.get(),
            full_name: client.full_name(),
            email: client.email.clone().filter(|s| !s.is_empty()),
            phone: client.phone.clone().filter(|s| !s.is_empty()),
            created: client.created_at.as_ref().map(format_date),
        }
    }
}

/// Option of the client dropdown in the deal form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientOption {
    /// Client id as submitted by the `<select>`.
    pub value: String,
    pub label: String,
}

impl From<&Client> for ClientOption {
    fn from(client: &Client) -> Self {
        Self {
            value: client.id.to_string(),
            label: format!("{} (ID: {})", client.full_name(), client.id),
        }
    }
}

pub fn client_list_view(clients: &[Client]) -> ListView<ClientCard> {
    ListView::from_items(clients.iter().map(ClientCard::from).collect())
}

pub fn client_options(clients: &[Client]) -> Vec<ClientOption> {
    clients.iter().map(ClientOption::from).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::types::ClientId;

    fn client(id: i32, email: Option<&str>, phone: Option<&str>) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            first_name: "Ivan".to_string(),
            last_name: format!("Ivanov{id}"),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            passport_data: None,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap()),
            updated_at: None,
        }
    }

    #[test]
    fn one_card_per_client() {
        let clients = vec![
            client(1, Some("a@example.com"), None),
            client(2, None, Some("555")),
            client(3, None, None),
        ];

        let view = client_list_view(&clients);
        let cards = view.items();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].email.as_deref(), Some("a@example.com"));
        assert!(cards[0].phone.is_none());
        assert_eq!(cards[1].phone.as_deref(), Some("555"));
        assert_eq!(cards[2].created.as_deref(), Some("31.01.2024"));
    }

    #[test]
    fn no_clients_is_empty_state() {
        assert_eq!(client_list_view(&[]), ListView::Empty);
    }

    #[test]
    fn option_label_includes_id() {
        let options = client_options(&[client(12, None, None)]);
        assert_eq!(options[0].value, "12");
        assert_eq!(options[0].label, "Ivan Ivanov12 (ID: 12)");
    }
}
