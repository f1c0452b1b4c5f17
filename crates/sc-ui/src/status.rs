//! Status line fed by session events

use std::sync::Arc;

use parking_lot::RwLock;
use sc_core::events::{events, EventBus, SubscriptionId};
use sc_core::{Catalog, ShowcaseId};
use tracing::info;

/// Last thing that happened in the session, as one line of text
#[derive(Debug, Default)]
pub struct StatusLine {
    text: RwLock<String>,
}

impl StatusLine {
    /// Create a status line and subscribe it to `bus`
    pub fn attach(bus: &EventBus, catalog: Arc<Catalog>) -> (Arc<Self>, Vec<SubscriptionId>) {
        let status = Arc::new(Self::default());
        let mut subscriptions = Vec::with_capacity(3);

        let line = status.clone();
        subscriptions.push(bus.subscribe(move |e: &events::FilterChanged| {
            line.set(format!("Filter {} · {} visible", e.selection, e.visible_count));
        }));

        let line = status.clone();
        let titles = catalog.clone();
        subscriptions.push(bus.subscribe(move |e: &events::ShowcaseOpened| {
            line.set(format!("Viewing {}", title_of(&titles, e.id)));
        }));

        let line = status.clone();
        subscriptions.push(bus.subscribe(move |e: &events::ShowcaseClosed| {
            line.set(format!("Closed {}", title_of(&catalog, e.last)));
        }));

        (status, subscriptions)
    }

    pub fn text(&self) -> String {
        self.text.read().clone()
    }

    fn set(&self, text: String) {
        info!("{}", text);
        *self.text.write() = text;
    }
}

fn title_of(catalog: &Catalog, id: ShowcaseId) -> String {
    catalog
        .get_by_id(id)
        .map(|record| record.title.clone())
        .unwrap_or_else(|| format!("#{id}"))
}
