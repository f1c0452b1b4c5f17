//! Property-based invariant tests for navigation.
//!
//! 1. `next()` N times over a catalog of length N returns to the start.
//! 2. Same for `prev()`.
//! 3. `next()` then `prev()` is the identity.
//! 4. Navigation steps over the full catalog whatever the filter.
//! 5. Steps while closed leave the controller closed.
//! 6. Unknown ids never change the state.

use std::sync::Arc;

use proptest::prelude::*;
use sc_core::{
    Catalog, NavigationController, NavigationState, Session, SessionSettings, ShowcaseId, ShowcaseRecord,
};

// ── Helpers ─────────────────────────────────────────────────────────────

const TAGS: &[&str] = &["2D", "3D", "CSS", "Game"];

fn catalog_strategy() -> impl Strategy<Value = Arc<Catalog>> {
    prop::collection::vec(prop::sample::select(TAGS), 1..16).prop_map(|tags| {
        let records = tags
            .into_iter()
            .enumerate()
            .map(|(idx, tag)| ShowcaseRecord::new(idx as u32 * 10 + 7, format!("Showcase {idx}"), [tag], "Stub"))
            .collect();
        Arc::new(Catalog::from_records(records).unwrap())
    })
}

fn catalog_and_start() -> impl Strategy<Value = (Arc<Catalog>, usize)> {
    catalog_strategy().prop_flat_map(|catalog| {
        let len = catalog.len();
        (Just(catalog), 0..len)
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Wraparound
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_cycles_back((catalog, start) in catalog_and_start()) {
        let start_id = catalog.get_by_index(start).unwrap().id;
        let nav = NavigationController::new(catalog.clone());
        nav.open(start_id);
        
        for _ in 0..catalog.len() {
            nav.next();
        }
        prop_assert_eq!(nav.state(), NavigationState::Open(start_id));
    }
    
    #[test]
    fn prev_cycles_back((catalog, start) in catalog_and_start()) {
        let start_id = catalog.get_by_index(start).unwrap().id;
        let nav = NavigationController::new(catalog.clone());
        nav.open(start_id);
        
        for _ in 0..catalog.len() {
            nav.prev();
        }
        prop_assert_eq!(nav.state(), NavigationState::Open(start_id));
    }
    
    #[test]
    fn next_then_prev_is_identity((catalog, start) in catalog_and_start()) {
        let start_id = catalog.get_by_index(start).unwrap().id;
        let nav = NavigationController::new(catalog);
        nav.open(start_id);
        
        nav.next();
        nav.prev();
        prop_assert_eq!(nav.state(), NavigationState::Open(start_id));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Full-catalog navigation under any filter
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_ignores_filter(
        (catalog, start) in catalog_and_start(),
        tag in prop::sample::select(TAGS),
    ) {
        let len = catalog.len();
        let start_id = catalog.get_by_index(start).unwrap().id;
        let expected = catalog.get_by_index((start + 1) % len).unwrap().id;
        
        let session = Session::new(catalog, SessionSettings::default());
        session.toggle_tag(tag);
        session.open(start_id);
        session.next();
        
        prop_assert_eq!(session.state(), NavigationState::Open(expected));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Guards
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn closed_steps_stay_closed(catalog in catalog_strategy(), steps in prop::collection::vec(any::<bool>(), 0..20)) {
        let nav = NavigationController::new(catalog);
        for forward in steps {
            if forward {
                prop_assert!(!nav.next());
            } else {
                prop_assert!(!nav.prev());
            }
        }
        prop_assert_eq!(nav.state(), NavigationState::Closed);
    }
    
    #[test]
    fn unknown_ids_are_refused((catalog, start) in catalog_and_start(), unknown in 0u32..1000) {
        // Generated ids are all ≡ 7 (mod 10)
        prop_assume!(unknown % 10 != 7);
        let nav = NavigationController::new(catalog.clone());
        
        prop_assert!(!nav.open(ShowcaseId(unknown)));
        prop_assert_eq!(nav.state(), NavigationState::Closed);
        
        let start_id = catalog.get_by_index(start).unwrap().id;
        nav.open(start_id);
        prop_assert!(!nav.jump_to(ShowcaseId(unknown)));
        prop_assert_eq!(nav.state(), NavigationState::Open(start_id));
    }
}
