use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::PersonName;
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
/// Raw values of the create-client form, exactly as typed.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub first_name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|_| FormError::MissingClientName)?;

        let first_name =
            PersonName::new(form.first_name).map_err(|_| FormError::MissingClientName)?;
        let last_name = PersonName::new(form.last_name).map_err(|_| FormError::MissingClientName)?;

        Ok(NewClient::new(
            first_name,
            last_name,
            Some(form.email),
            Some(form.phone),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first_name: &str, last_name: &str) -> AddClientForm {
        AddClientForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: "anna@example.com".to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn converts_complete_form() {
        let new_client = NewClient::try_from(form("Anna", "Smirnova")).unwrap();
        assert_eq!(new_client.first_name.as_str(), "Anna");
        assert_eq!(new_client.email.as_deref(), Some("anna@example.com"));
        assert!(new_client.phone.is_none());
    }

    #[test]
    fn rejects_missing_first_name() {
        assert_eq!(
            NewClient::try_from(form("", "Smirnova")),
            Err(FormError::MissingClientName)
        );
    }

    #[test]
    fn rejects_whitespace_last_name() {
        assert_eq!(
            NewClient::try_from(form("Anna", "   ")),
            Err(FormError::MissingClientName)
        );
    }
}
