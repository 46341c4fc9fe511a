//! Level lookup and the seeded procedural generator
//!
//! Every index maps to exactly one level. The tutorial tier is hand-authored;
//! past it, `generate` derives the layout from the index alone, so levels
//! never need to be stored - the same index rebuilds the same level.

pub mod curated;

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::{BOARD_MAX, BOARD_MIN, MAX_OFFSET_MS, MAX_PLACE_ATTEMPTS, MIN_NODE_SEPARATION};
use crate::dist_sq;
use crate::engine::level::{GameNode, LevelConfig, NodeColor, NodeKind, PALETTE};
use crate::engine::rng::Mulberry32;

/// Total addressable level indices
pub const TOTAL_LEVELS: u32 = 9999;

/// Per-index seed formula; gives each index an independent stream
const SEED_MUL: u32 = 7331;
const SEED_ADD: u32 = 12345;

const ADJECTIVES: [&str; 13] = [
    "Silent", "Neon", "Deep", "Cosmic", "Rapid", "Harmonic", "Solar", "Lunar", "Void", "Zen",
    "Astral", "Binary", "Prismatic",
];
const NOUNS: [&str; 13] = [
    "Pulse", "Drift", "Flow", "Echo", "Tide", "Orbit", "Signal", "Wave", "Path", "Link", "Phase",
    "Current", "Shard",
];

/// Level for an index: curated below the tutorial tier, generated above it
pub fn get_level(index: u32) -> LevelConfig {
    curated::get(index).unwrap_or_else(|| generate(index))
}

fn too_close(nodes: &[GameNode], candidate: Vec2) -> bool {
    nodes
        .iter()
        .any(|n| dist_sq(n.pos(), candidate) < MIN_NODE_SEPARATION * MIN_NODE_SEPARATION)
}

/// Roll positions around `origin` until one lands inside the padded board and
/// clear of every existing node. Bounded; placement may legitimately fail on
/// a crowded board, and callers degrade gracefully when it does.
fn place_near(
    rng: &mut Mulberry32,
    nodes: &[GameNode],
    origin: Vec2,
    dist_min: f32,
    dist_max: f32,
) -> Option<Vec2> {
    for _ in 0..MAX_PLACE_ATTEMPTS {
        let angle = rng.range(0.0, TAU);
        let dist = rng.range(dist_min, dist_max);
        let cand = origin + Vec2::new(angle.cos() * dist, angle.sin() * dist);
        if cand.x > BOARD_MIN
            && cand.x < BOARD_MAX
            && cand.y > BOARD_MIN
            && cand.y < BOARD_MAX
            && !too_close(nodes, cand)
        {
            return Some(cand);
        }
    }
    None
}

/// Deterministically generate the level for an index.
///
/// Builds a solution path as a random walk (color propagating along it,
/// re-rolled at prisms), then attaches same-colored dead-end decoys to
/// non-end path nodes. Difficulty scales with the index: longer paths,
/// faster intervals, more special nodes, more decoys.
pub fn generate(index: u32) -> LevelConfig {
    let mut rng = Mulberry32::new(index.wrapping_mul(SEED_MUL).wrapping_add(SEED_ADD));

    let is_hard = index > 50;
    let is_very_hard = index > 150;

    let (min_len, max_len) = if is_very_hard {
        (5.0, 8.0)
    } else if is_hard {
        (4.0, 6.0)
    } else {
        (3.0, 5.0)
    };
    let path_length = rng.range(min_len, max_len).floor() as u32;

    let mut base_intervals: Vec<u32> = vec![2000, 3000, 4000];
    if index > 20 {
        base_intervals.extend([1500, 2500]);
    }

    let mut nodes: Vec<GameNode> = Vec::new();
    let mut current_color = *rng.choice(&PALETTE);

    // Random walk from a random starting point
    let mut current = Vec2::new(rng.range(15.0, 85.0), rng.range(15.0, 85.0));
    nodes.push(GameNode {
        id: format!("l{index}_start"),
        x: current.x,
        y: current.y,
        interval: *rng.choice(&base_intervals),
        offset: 0,
        kind: NodeKind::Start,
        color: current_color,
    });

    for i in 0..path_length {
        let Some(next) = place_near(&mut rng, &nodes, current, 20.0, 35.0) else {
            // Board too crowded to continue; ship the shorter level
            log::warn!(
                "level {index}: path stalled at {} of {} nodes",
                nodes.len(),
                path_length + 1
            );
            break;
        };

        let roll = rng.next_f32();
        let kind = if index > 20 && roll > 0.90 {
            NodeKind::Anchor
        } else if index > 15 && roll > 0.85 {
            NodeKind::Prism
        } else {
            NodeKind::Basic
        };

        // Color propagates along the chain; a prism re-rolls it
        let color = if kind == NodeKind::Prism {
            let others: Vec<NodeColor> = PALETTE
                .iter()
                .copied()
                .filter(|c| *c != current_color)
                .collect();
            current_color = *rng.choice(&others);
            current_color
        } else {
            current_color
        };

        nodes.push(GameNode {
            id: format!("l{index}_n{i}"),
            x: next.x,
            y: next.y,
            interval: *rng.choice(&base_intervals),
            offset: rng.range(0.0, MAX_OFFSET_MS) as u32,
            kind,
            color,
        });
        current = next;
    }

    // The walk's final node becomes the goal
    if nodes.len() > 1 {
        if let Some(last) = nodes.last_mut() {
            last.kind = NodeKind::End;
        }
    }

    // Dead-end decoys branch off the path wearing the parent's color, so they
    // look like valid continuations. Deliberate ambiguity, not debris.
    let decoy_count = if is_very_hard {
        3
    } else if is_hard {
        2
    } else {
        1
    };
    let path_snapshot = nodes.clone();
    for i in 0..decoy_count {
        let candidates: Vec<&GameNode> = path_snapshot
            .iter()
            .filter(|n| n.kind != NodeKind::End)
            .collect();
        let parent = *rng.choice(&candidates);
        if let Some(pos) = place_near(&mut rng, &nodes, parent.pos(), 20.0, 30.0) {
            nodes.push(GameNode {
                id: format!("l{index}_decoy{i}"),
                x: pos.x,
                y: pos.y,
                interval: *rng.choice(&base_intervals),
                offset: rng.range(0.0, MAX_OFFSET_MS) as u32,
                kind: NodeKind::Basic,
                color: parent.color,
            });
        }
    }

    let adj = *rng.choice(&ADJECTIVES);
    let noun = *rng.choice(&NOUNS);

    LevelConfig {
        id: format!("level-{index}"),
        name: format!("{adj} {noun}"),
        description: format!("Sequence {}", index + 1),
        nodes,
        connections: Vec::new(),
    }
}
