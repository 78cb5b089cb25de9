//! Hover Module
//!
//! Pointer tracking for the filmstrip and its debounced synchronization into
//! the shared store.
//!
//! ```text
//! view (per frame) --containment--> RegionHover --edges--> HoverReconciler
//!                                                               |
//!                                             poll(now) --> Debouncer due?
//!                                                               |
//!                                                   compare with store, dispatch
//! ```

mod debounce;
mod reconciler;
mod region;

pub use debounce::Debouncer;
pub use reconciler::{HOVER_NOTIFY_DEBOUNCE, HoverReconciler};
pub use region::{PointerEdge, PointerRegion, RegionHover, route_edges};
