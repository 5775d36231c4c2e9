use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::CrmApi;
use crate::models::page::Page;

pub const DEFAULT_VISITOR_TTL: Duration = Duration::from_secs(60 * 60);

struct VisitorPage {
    page: Arc<Mutex<Page>>,
    last_seen: Instant,
}

/// Shared state of the web front-end: the API handle and one page per visitor.
///
/// A page lock is held for the whole duration of an action, network wait
/// included, so actions of one visitor never interleave. The visitor map is
/// only locked to look a page up.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn CrmApi>,
    visitors: Arc<Mutex<HashMap<Uuid, VisitorPage>>>,
    visitor_ttl: Duration,
}

impl AppState {
    pub fn new(api: Arc<dyn CrmApi>) -> Self {
        Self::with_visitor_ttl(api, DEFAULT_VISITOR_TTL)
    }

    pub fn with_visitor_ttl(api: Arc<dyn CrmApi>, visitor_ttl: Duration) -> Self {
        Self {
            api,
            visitors: Arc::new(Mutex::new(HashMap::new())),
            visitor_ttl,
        }
    }

    /// Page of `visitor`, created on first use. The flag is `true` for a page
    /// that was just created.
    ///
    /// Creating a page also drops the pages of visitors idle past the TTL.
    pub async fn visitor_page(&self, visitor: Uuid) -> (Arc<Mutex<Page>>, bool) {
        let now = Instant::now();
        let mut visitors = self.visitors.lock().await;

        if let Some(entry) = visitors.get_mut(&visitor) {
            entry.last_seen = now;
            return (entry.page.clone(), false);
        }

        let ttl = self.visitor_ttl;
        visitors.retain(|_, entry| now.duration_since(entry.last_seen) < ttl);

        let page = Arc::new(Mutex::new(Page::default()));
        visitors.insert(
            visitor,
            VisitorPage {
                page: page.clone(),
                last_seen: now,
            },
        );
        (page, true)
    }

    pub async fn visitor_count(&self) -> usize {
        self.visitors.lock().await.len()
    }
}
