//! Core functionality for the showcase gallery
//! 
//! This crate owns the catalog of showcases, the tag filter, and the
//! navigation state machine. Everything here is synchronous and free of
//! rendering concerns; presentational collaborators observe changes through
//! subscribers and the event bus.

pub mod catalog;
pub mod events;
pub mod filter;
pub mod navigation;
pub mod quick_nav;
pub mod route;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, RendererRef, ShowcaseDetails, ShowcaseId, ShowcaseRecord, MAX_RATING};
pub use events::{EventBus, SubscriptionId};
pub use filter::{FilterSelection, TagCount, ALL_TAG};
pub use navigation::{NavigationContext, NavigationController, NavigationState, NavigationSubscriber};
pub use quick_nav::QuickNav;
pub use route::Route;
pub use session::{CloseFilterPolicy, Session, SessionSettings};
