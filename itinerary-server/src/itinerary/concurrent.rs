//! Parallel endpoint detection.
//!
//! One task is spawned per segment. Each task scans a shared, read-only
//! snapshot of the whole segment list and hands back a verdict for its own
//! segment through its join handle. Once every task has joined, a single
//! reduction in the caller picks the start and end. Tasks never write to
//! shared state, so there is nothing to race on and nothing that can block.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use super::endpoints::{EndpointError, EndpointPair};
use crate::domain::Segment;

/// What one task learned about its own segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SegmentVerdict {
    /// The segment's origin is some segment's destination.
    origin_is_destination: bool,

    /// The segment's destination is some segment's origin.
    destination_is_origin: bool,
}

impl SegmentVerdict {
    /// Scan every segment, including `segments[index]` itself.
    fn compute(segments: &[Segment], index: usize) -> Self {
        let own = &segments[index];
        let mut verdict = Self {
            origin_is_destination: false,
            destination_is_origin: false,
        };

        for other in segments {
            verdict.origin_is_destination |= own.origin == other.destination;
            verdict.destination_is_origin |= own.destination == other.origin;
            if verdict.origin_is_destination && verdict.destination_is_origin {
                break;
            }
        }

        verdict
    }
}

/// Detect the journey's start and end using one task per segment.
///
/// Gives the same answer as
/// [`detect_endpoints`](super::endpoints::detect_endpoints) on every input,
/// at O(n²) total work. Must be called from within a tokio runtime.
pub async fn detect_endpoints_concurrent(
    segments: &[Segment],
) -> Result<EndpointPair, EndpointError> {
    if segments.is_empty() {
        return Err(EndpointError::Empty);
    }

    let snapshot: Arc<[Segment]> = Arc::from(segments);

    let handles: Vec<_> = (0..snapshot.len())
        .map(|index| {
            let snapshot = Arc::clone(&snapshot);
            tokio::spawn(async move { SegmentVerdict::compute(&snapshot, index) })
        })
        .collect();

    let verdicts = join_all(handles)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| EndpointError::TaskFailed(e.to_string()))?;

    debug!(tasks = verdicts.len(), "endpoint tasks joined");

    reduce(&snapshot, &verdicts)
}

/// Pick the first qualifying start and end, in input order.
fn reduce(segments: &[Segment], verdicts: &[SegmentVerdict]) -> Result<EndpointPair, EndpointError> {
    let start = segments
        .iter()
        .zip(verdicts)
        .find(|(_, v)| !v.origin_is_destination)
        .map(|(s, _)| s.origin.clone())
        .ok_or(EndpointError::NoStart)?;
    let end = segments
        .iter()
        .zip(verdicts)
        .find(|(_, v)| !v.destination_is_origin)
        .map(|(s, _)| s.destination.clone())
        .ok_or(EndpointError::NoEnd)?;

    Ok(EndpointPair { start, end })
}
