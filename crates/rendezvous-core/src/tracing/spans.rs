//! Span definitions for the reachability computations.

/// Create a meeting-point span.
#[macro_export]
macro_rules! meeting_span {
    ($first:expr, $second:expr) => {
        tracing::info_span!(
            "rendezvous.meeting",
            first_starts = $first,
            second_starts = $second
        )
    };
}

/// Create a single-direction reachability span.
#[macro_export]
macro_rules! reach_span {
    ($flow:expr, $starts:expr) => {
        tracing::debug_span!("rendezvous.reach", flow = %$flow, starts = $starts)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MEETING: &str = "rendezvous.meeting";
    pub const REACH: &str = "rendezvous.reach";
}
