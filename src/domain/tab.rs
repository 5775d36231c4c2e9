//! Panels of the single-page UI and the controller selecting the visible one.

use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Named panel of the page.
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    AsRefStr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Clients,
    Deals,
}

impl Tab {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Clients => "👥 Clients",
            Self::Deals => "💼 Deals",
        }
    }
}

/// Entry of the tab bar as rendered by the templates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TabPanel {
    pub name: &'static str,
    pub title: &'static str,
    pub active: bool,
}

/// Keeps exactly one [`Tab`] active.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Makes `tab` the visible panel, returning the previously active one.
    pub fn activate(&mut self, tab: Tab) -> Tab {
        std::mem::replace(&mut self.active, tab)
    }

    pub fn panels(&self) -> Vec<TabPanel> {
        Tab::iter()
            .map(|tab| TabPanel {
                name: tab.into(),
                title: tab.title(),
                active: tab == self.active,
            })
            .collect()
    }
}
