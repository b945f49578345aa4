/// Lifecycle state of a live track.
///
/// Derived from the track's age. Expiry has no variant: an expired track is
/// simply absent from the tracker's live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched a detection in the most recent update
    #[default]
    Matched,
    /// Carried forward without a match, aging toward expiry
    Unmatched,
}
