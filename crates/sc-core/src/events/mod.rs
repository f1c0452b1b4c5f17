//! Session event bus
//!
//! Handlers are keyed by event type. Publishing snapshots the handlers for
//! that type and runs them with the registry unlocked, so a handler may
//! drive the session (and publish again) from inside its callback.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::trace;

/// Marker for values that can travel on the bus
pub trait Event: Any + fmt::Debug + Send + Sync {}

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Session-wide event bus
pub struct EventBus {
    handlers: RwLock<AHashMap<TypeId, Vec<(SubscriptionId, Handler)>>>,
    next_id: AtomicU64,
}

/// Session events
pub mod events {
    use super::Event;
    use crate::catalog::ShowcaseId;
    use crate::filter::FilterSelection;

    /// Catalog attached to a session
    #[derive(Debug, Clone)]
    pub struct CatalogLoaded {
        pub showcase_count: usize,
        pub tag_count: usize,
    }

    /// Filter selection changed
    #[derive(Debug, Clone)]
    pub struct FilterChanged {
        pub selection: FilterSelection,
        pub visible_count: usize,
    }

    /// A showcase became the open one
    #[derive(Debug, Clone)]
    pub struct ShowcaseOpened {
        pub id: ShowcaseId,
        pub previous: Option<ShowcaseId>,
    }

    /// The viewer returned to the catalog
    #[derive(Debug, Clone)]
    pub struct ShowcaseClosed {
        pub last: ShowcaseId,
    }

    impl Event for CatalogLoaded {}
    impl Event for FilterChanged {}
    impl Event for ShowcaseOpened {}
    impl Event for ShowcaseClosed {}
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(AHashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Call `handler` for every published `E`
    pub fn subscribe<E, F>(&self, handler: F) -> SubscriptionId
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let erased: Handler = Arc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.handlers
            .write()
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, erased));
        id
    }

    /// Drop a subscription. Returns whether it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let mut removed = false;
        for list in handlers.values_mut() {
            let before = list.len();
            list.retain(|(sub, _)| *sub != id);
            removed |= list.len() != before;
        }
        removed
    }

    /// Deliver `event` to the handlers subscribed to its type
    pub fn publish<E: Event>(&self, event: E) {
        let snapshot: Vec<Handler> = match self.handlers.read().get(&TypeId::of::<E>()) {
            Some(list) => list.iter().map(|(_, handler)| handler.clone()).collect(),
            None => return,
        };

        trace!("Publishing {:?} to {} handlers", event, snapshot.len());
        for handler in snapshot {
            handler(&event);
        }
    }

    /// Number of live subscriptions for `E`
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.handlers
            .read()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.read();
        f.debug_struct("EventBus")
            .field("event_types", &handlers.len())
            .field("subscriptions", &handlers.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::events::{FilterChanged, ShowcaseClosed, ShowcaseOpened};
    use super::*;
    use crate::catalog::ShowcaseId;
    use crate::filter::FilterSelection;
    use parking_lot::Mutex;

    #[test]
    fn test_publish_reaches_matching_subscribers() {
        let bus = EventBus::new();
        let opened = Arc::new(Mutex::new(Vec::new()));

        let sink = opened.clone();
        bus.subscribe(move |e: &ShowcaseOpened| sink.lock().push(e.id));

        bus.publish(ShowcaseOpened { id: ShowcaseId(4), previous: None });
        bus.publish(ShowcaseClosed { last: ShowcaseId(4) });
        bus.publish(ShowcaseOpened { id: ShowcaseId(5), previous: Some(ShowcaseId(4)) });

        assert_eq!(*opened.lock(), vec![ShowcaseId(4), ShowcaseId(5)]);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::default();
        bus.publish(FilterChanged {
            selection: FilterSelection::all(),
            visible_count: 0,
        });
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let count = Arc::new(Mutex::new(0));

        let sink = count.clone();
        let id = bus.subscribe(move |_: &ShowcaseClosed| *sink.lock() += 1);
        bus.publish(ShowcaseClosed { last: ShowcaseId(1) });

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(ShowcaseClosed { last: ShowcaseId(1) });

        assert_eq!(*count.lock(), 1);
        assert_eq!(bus.subscriber_count::<ShowcaseClosed>(), 0);
    }

    #[test]
    fn test_handler_can_publish_and_subscribe() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let inner = bus.clone();
        bus.subscribe(move |e: &ShowcaseClosed| {
            inner.publish(ShowcaseOpened { id: e.last, previous: None });
            inner.subscribe(|_: &FilterChanged| {});
        });
        let sink = seen.clone();
        bus.subscribe(move |e: &ShowcaseOpened| sink.lock().push(e.id));

        bus.publish(ShowcaseClosed { last: ShowcaseId(7) });

        assert_eq!(*seen.lock(), vec![ShowcaseId(7)]);
        assert_eq!(bus.subscriber_count::<FilterChanged>(), 1);
    }
}
