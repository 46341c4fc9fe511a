//! Temporal activity model
//!
//! A node is connectable while its phase sits inside a window centered on the
//! pulse peak (cycle time 0). The window is capped at 70% of the node's own
//! interval so fast nodes are never active through their whole cycle. Anchors
//! additionally hold their charge for a grace period once reached.

use crate::consts::{ANCHOR_HOLD_MS, PULSE_WINDOW_MS};

use super::level::{Connection, GameNode, NodeKind};

/// Is this node connectable at the given game time?
///
/// Pure; evaluated every animation tick and on every connection attempt, and
/// must agree between those calls for the same inputs.
pub fn is_active(node: &GameNode, now_ms: u64, connections: &[Connection]) -> bool {
    // Anchor hold: a reached anchor stays lit regardless of its own phase
    if node.kind == NodeKind::Anchor {
        if let Some(incoming) = connections.iter().find(|c| c.to == node.id) {
            if now_ms >= incoming.created_at && now_ms - incoming.created_at < ANCHOR_HOLD_MS {
                return true;
            }
        }
    }

    let window = PULSE_WINDOW_MS.min(node.interval as f32 * 0.7);
    let half = window / 2.0;
    let cycle_pos = ((now_ms + node.offset as u64) % node.interval as u64) as f32;
    // The window wraps across the cycle boundary at phase 0
    cycle_pos < half || cycle_pos > node.interval as f32 - half
}
