//! Connection validity rules
//!
//! A connection commits only if both endpoints are mid-pulse at the same
//! moment and the colors are compatible. Rejections are ordinary gameplay
//! outcomes, not errors; the caller decides which ones count as mistakes.

use super::level::{Connection, GameNode, NodeKind};
use super::pulse::is_active;

/// Why a connection attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Source and target are the same node
    SelfLoop,
    /// This unordered pair is already linked
    Duplicate,
    /// One or both endpoints were outside their pulse window (a "miss")
    OutOfPhase,
    /// Target color differs from the source color and target is not a prism
    ColorMismatch,
}

/// May a drag begin from this node?
///
/// Only the start node and nodes already incident to a connection are legal
/// origins; players extend the reached graph, they never seed new components.
pub fn can_originate(node: &GameNode, connections: &[Connection]) -> bool {
    node.kind == NodeKind::Start || connections.iter().any(|c| c.touches(&node.id))
}

/// Validate a proposed connection and construct it on success.
///
/// Does not mutate the connection set; on success the caller appends the
/// returned connection (the single mutation point lives in the session).
pub fn try_connect(
    source: &GameNode,
    target: &GameNode,
    now_ms: u64,
    connections: &[Connection],
) -> Result<Connection, RejectReason> {
    if source.id == target.id {
        return Err(RejectReason::SelfLoop);
    }
    if connections.iter().any(|c| c.links(&source.id, &target.id)) {
        return Err(RejectReason::Duplicate);
    }
    if !is_active(source, now_ms, connections) || !is_active(target, now_ms, connections) {
        return Err(RejectReason::OutOfPhase);
    }
    // Prisms accept any incoming color; everything else must match the source
    if source.color != target.color && target.kind != NodeKind::Prism {
        return Err(RejectReason::ColorMismatch);
    }

    Ok(Connection::new(source, target, now_ms))
}
