use crate::domain::types::{ClientId, DealId};

/// Resources of the CRM API, relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Clients,
    Client(ClientId),
    Deals,
    Deal(DealId),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Self::Clients => "/clients".to_string(),
            Self::Client(id) => format!("/clients/{id}"),
            Self::Deals => "/deals".to_string(),
            Self::Deal(id) => format!("/deals/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_api_root() {
        assert_eq!(Endpoint::Clients.path(), "/clients");
        assert_eq!(Endpoint::Deal(DealId::new(8).unwrap()).path(), "/deals/8");
    }
}
