//! Level data model
//!
//! A level is an immutable layout of pulsing nodes; connections are the only
//! state players add during an attempt. These types round-trip JSON so levels
//! can come from the curated set, the procedural generator, or any external
//! producer speaking the same schema.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node behavior classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The level's entry point; always a legal drag origin
    Start,
    /// Reaching this node solves the level
    End,
    Basic,
    /// Accepts any incoming color and re-colors the chain beyond it
    Prism,
    /// Holds its charge for a grace period after being reached
    Anchor,
}

/// Fixed color palette; compatibility class for connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Cyan,
    Amber,
    Purple,
    Green,
    Slate,
    Red,
    Blue,
    Pink,
}

/// Palette in stable order; the generator indexes into this
pub const PALETTE: [NodeColor; 8] = [
    NodeColor::Cyan,
    NodeColor::Amber,
    NodeColor::Purple,
    NodeColor::Green,
    NodeColor::Slate,
    NodeColor::Red,
    NodeColor::Blue,
    NodeColor::Pink,
];

impl NodeColor {
    /// CSS hex value for rendering layers
    pub fn hex(&self) -> &'static str {
        match self {
            NodeColor::Cyan => "#06b6d4",
            NodeColor::Amber => "#f59e0b",
            NodeColor::Purple => "#8b5cf6",
            NodeColor::Green => "#10b981",
            NodeColor::Slate => "#64748b",
            NodeColor::Red => "#ef4444",
            NodeColor::Blue => "#3b82f6",
            NodeColor::Pink => "#ec4899",
        }
    }
}

/// A pulsing node on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameNode {
    /// Unique within a level
    pub id: String,
    /// Board position, percentage 0-100
    pub x: f32,
    pub y: f32,
    /// Pulse period in ms, > 0
    pub interval: u32,
    /// Phase offset in ms, added to game time before the cycle modulo
    pub offset: u32,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub color: NodeColor,
}

impl GameNode {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A player-created edge between two nodes
///
/// Directed at creation (`from` establishes the color) but undirected for
/// reachability. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Derived from the endpoint pair
    pub id: String,
    pub from: String,
    pub to: String,
    /// Inherited from the source node, preserving lineage through prisms
    pub color: NodeColor,
    /// Game time of the successful commit (ms); drives anchor hold
    #[serde(rename = "createdAt", default)]
    pub created_at: u64,
}

impl Connection {
    pub fn new(from: &GameNode, to: &GameNode, now_ms: u64) -> Self {
        Self {
            id: format!("{}-{}", from.id, to.id),
            from: from.id.clone(),
            to: to.id.clone(),
            color: from.color,
            created_at: now_ms,
        }
    }

    /// True if this connection joins the given unordered pair
    pub fn links(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// True if the connection touches the given node
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}

/// Malformed level data; the only fatal error class in the engine.
/// Rejected at load time so mid-session code can assume a well-formed level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no start node")]
    MissingStart,
    #[error("level has no end node")]
    MissingEnd,
    #[error("duplicate node id {0:?}")]
    DuplicateNodeId(String),
    #[error("node {0:?} has a zero pulse interval")]
    ZeroInterval(String),
    #[error("preset connection references unknown node {0:?}")]
    UnknownNode(String),
    #[error("duplicate preset connection between {0:?} and {1:?}")]
    DuplicatePair(String, String),
}

/// An immutable level layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub nodes: Vec<GameNode>,
    /// Pre-seeded connections; curated/tutorial levels only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
}

impl LevelConfig {
    /// Parse a level from JSON (the contract for external level producers)
    /// and validate it in one step.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn node(&self, id: &str) -> Option<&GameNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Check the structural invariants every loaded level must satisfy
    pub fn validate(&self) -> Result<(), LevelError> {
        for (i, node) in self.nodes.iter().enumerate() {
            if self.nodes[..i].iter().any(|n| n.id == node.id) {
                return Err(LevelError::DuplicateNodeId(node.id.clone()));
            }
            if node.interval == 0 {
                return Err(LevelError::ZeroInterval(node.id.clone()));
            }
        }
        if !self.nodes.iter().any(|n| n.kind == NodeKind::Start) {
            return Err(LevelError::MissingStart);
        }
        if !self.nodes.iter().any(|n| n.kind == NodeKind::End) {
            return Err(LevelError::MissingEnd);
        }
        for (i, conn) in self.connections.iter().enumerate() {
            for end in [&conn.from, &conn.to] {
                if self.node(end).is_none() {
                    return Err(LevelError::UnknownNode(end.clone()));
                }
            }
            if self.connections[..i].iter().any(|c| c.links(&conn.from, &conn.to)) {
                return Err(LevelError::DuplicatePair(conn.from.clone(), conn.to.clone()));
            }
        }
        Ok(())
    }
}
