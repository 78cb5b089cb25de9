//! Pointer Regions
//!
//! The filmstrip has two pointer-bearing areas: the local thumbnail and the
//! remote thumbnails. The view reports, once per frame, whether the pointer is
//! inside each of them; [`RegionHover`] turns that into enter/leave edges.

use super::reconciler::HoverReconciler;
use std::time::Instant;

/// Pointer-bearing areas of the filmstrip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRegion {
    LocalThumbnail,
    RemoteThumbnails,
}

/// A pointer crossing a region boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEdge {
    Enter(PointerRegion),
    Leave(PointerRegion),
}

/// Per-region containment from the previous frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionHover {
    local: bool,
    remote: bool,
}

impl RegionHover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records this frame's containment and returns the edges since the last
    /// frame. Leaves come before enters.
    pub fn update(&mut self, local: bool, remote: bool) -> Vec<PointerEdge> {
        let regions = [
            (PointerRegion::LocalThumbnail, self.local, local),
            (PointerRegion::RemoteThumbnails, self.remote, remote),
        ];

        let mut edges: Vec<PointerEdge> = regions
            .iter()
            .filter(|(_, was, is)| *was && !*is)
            .map(|(region, _, _)| PointerEdge::Leave(*region))
            .collect();
        edges.extend(
            regions
                .iter()
                .filter(|(_, was, is)| !*was && *is)
                .map(|(region, _, _)| PointerEdge::Enter(*region)),
        );

        self.local = local;
        self.remote = remote;
        edges
    }

    /// Returns leave edges for every region the pointer is still in
    pub fn clear(&mut self) -> Vec<PointerEdge> {
        self.update(false, false)
    }
}

/// Feeds edges into the reconciler in order
pub fn route_edges(edges: &[PointerEdge], hover: &mut HoverReconciler, now: Instant) {
    for edge in edges {
        match edge {
            PointerEdge::Enter(_) => hover.on_pointer_enter(now),
            PointerEdge::Leave(_) => hover.on_pointer_leave(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{LogLevel, Logger};

    use super::PointerEdge::{Enter, Leave};
    use super::PointerRegion::{LocalThumbnail, RemoteThumbnails};

    #[test]
    fn test_enter_and_leave_single_region() {
        let mut regions = RegionHover::new();
        assert_eq!(regions.update(true, false), vec![Enter(LocalThumbnail)]);
        assert!(regions.update(true, false).is_empty());
        assert_eq!(regions.update(false, false), vec![Leave(LocalThumbnail)]);
    }

    #[test]
    fn test_crossing_regions_leaves_before_entering() {
        let mut regions = RegionHover::new();
        regions.update(true, false);

        assert_eq!(
            regions.update(false, true),
            vec![Leave(LocalThumbnail), Enter(RemoteThumbnails)]
        );
    }

    #[test]
    fn test_clear_leaves_everything() {
        let mut regions = RegionHover::new();
        regions.update(false, true);
        assert_eq!(regions.clear(), vec![Leave(RemoteThumbnails)]);
        assert!(regions.clear().is_empty());
    }

    #[test]
    fn test_routed_crossing_ends_hovered() {
        let (logger, _) = Logger::in_memory(LogLevel::Info);
        let mut hover = HoverReconciler::new(false, logger);
        let mut regions = RegionHover::new();
        let now = Instant::now();

        route_edges(&regions.update(true, false), &mut hover, now);
        route_edges(&regions.update(false, true), &mut hover, now);

        assert!(hover.is_hovered());
        assert!(hover.is_notify_pending());
    }
}
