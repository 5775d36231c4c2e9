//! UI state of the page: the active tab, both forms and both list containers.

use serde::Serialize;

use crate::domain::tab::TabController;
use crate::dto::ListView;
use crate::dto::client::{ClientCard, ClientOption};
use crate::dto::deal::DealCard;
use crate::forms::client::AddClientForm;
use crate::forms::deal::AddDealForm;

/// A form that can be shown and hidden; hiding clears its values.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FormPanel<F> {
    pub visible: bool,
    pub values: F,
}

impl<F: Default> FormPanel<F> {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.values = F::default();
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Page {
    pub tabs: TabController,
    pub client_form: FormPanel<AddClientForm>,
    pub deal_form: FormPanel<AddDealForm>,
    /// Choices of the client dropdown in the deal form.
    pub client_options: Vec<ClientOption>,
    pub clients: ListView<ClientCard>,
    pub deals: ListView<DealCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_clears_values() {
        let mut panel = FormPanel::<AddClientForm>::default();
        panel.show();
        panel.values.first_name = "Anna".to_string();

        panel.hide();

        assert!(!panel.visible);
        assert_eq!(panel.values, AddClientForm::default());
    }
}
