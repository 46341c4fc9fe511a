//! Game session driver
//!
//! Owns the one mutable piece of state in the engine: the connection set for
//! a single level attempt, plus the mistake counter and drag origin. Game
//! time is always an explicit input; the caller owns the clock and resets its
//! origin together with `reset`.

use glam::Vec2;

use crate::consts::NODE_HIT_RADIUS;
use crate::dist_sq;

use super::connect::{RejectReason, can_originate, try_connect};
use super::level::{Connection, GameNode, LevelConfig, LevelError};
use super::pulse::is_active;
use super::win::is_solved;

/// Lifecycle of one level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    Won,
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// The connection committed; `solved` reports the win re-check
    Connected { connection: Connection, solved: bool },
    /// A real attempt that failed (misses and color clashes count as mistakes)
    Rejected(RejectReason),
    /// No attempt: empty board, same node, or no drag in progress
    Ignored,
}

/// One level attempt in progress
#[derive(Debug, Clone)]
pub struct Session {
    level: LevelConfig,
    connections: Vec<Connection>,
    mistakes: u32,
    status: SessionStatus,
    drag_from: Option<String>,
}

impl Session {
    /// Start an attempt on a level, rejecting malformed configs up front
    pub fn new(level: LevelConfig) -> Result<Self, LevelError> {
        level.validate()?;
        let connections = level.connections.clone();
        Ok(Self {
            level,
            connections,
            mistakes: 0,
            status: SessionStatus::Playing,
            drag_from: None,
        })
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Restart the attempt: back to the level's preset connections.
    /// The caller resets its clock origin at the same moment.
    pub fn reset(&mut self) {
        self.connections = self.level.connections.clone();
        self.mistakes = 0;
        self.status = SessionStatus::Playing;
        self.drag_from = None;
    }

    /// Node under a board-space point, within the pointer pick-up radius
    pub fn node_at(&self, point: Vec2) -> Option<&GameNode> {
        self.level
            .nodes
            .iter()
            .find(|n| dist_sq(n.pos(), point) < NODE_HIT_RADIUS * NODE_HIT_RADIUS)
    }

    /// Is this node connectable right now? (per-frame render query)
    pub fn node_active(&self, node: &GameNode, now_ms: u64) -> bool {
        is_active(node, now_ms, &self.connections)
    }

    /// Try to start a drag at a point. Returns false when there is no node
    /// there or the node is not a legal origin; illegal origins are ignored
    /// without recording an attempt.
    pub fn begin_drag(&mut self, point: Vec2) -> bool {
        if self.status == SessionStatus::Won {
            return false;
        }
        let origin = match self.node_at(point) {
            Some(n) if can_originate(n, &self.connections) => n.id.clone(),
            _ => return false,
        };
        self.drag_from = Some(origin);
        true
    }

    /// Node the current drag started from, if any
    pub fn drag_origin(&self) -> Option<&GameNode> {
        self.drag_from.as_deref().and_then(|id| self.level.node(id))
    }

    pub fn cancel_drag(&mut self) {
        self.drag_from = None;
    }

    /// Finish a drag at a point. This is the engine's single mutation point:
    /// an accepted attempt appends exactly one connection, a failed one
    /// appends nothing.
    pub fn release(&mut self, point: Vec2, now_ms: u64) -> Attempt {
        let Some(from_id) = self.drag_from.take() else {
            return Attempt::Ignored;
        };
        let Some(target) = self.node_at(point) else {
            return Attempt::Ignored;
        };
        if target.id == from_id {
            return Attempt::Ignored;
        }
        // Origin was checked at drag start; look it up fresh for the commit
        let Some(source) = self.level.node(&from_id) else {
            return Attempt::Ignored;
        };

        match try_connect(source, target, now_ms, &self.connections) {
            Ok(connection) => {
                log::debug!("connected {} at t={now_ms}", connection.id);
                self.connections.push(connection.clone());
                let solved = is_solved(&self.level, &self.connections);
                if solved {
                    log::info!(
                        "level {} solved with {} mistakes",
                        self.level.id,
                        self.mistakes
                    );
                    self.status = SessionStatus::Won;
                }
                Attempt::Connected { connection, solved }
            }
            Err(reason) => {
                // Releasing onto an already-linked pair is a no-op, not a miss
                if matches!(reason, RejectReason::OutOfPhase | RejectReason::ColorMismatch) {
                    self.mistakes += 1;
                    log::debug!("missed attempt ({reason:?}) at t={now_ms}");
                }
                Attempt::Rejected(reason)
            }
        }
    }

    /// Star rating for the finished attempt: perfect runs earn 3,
    /// up to two misses earn 2, anything else 1
    pub fn stars(&self) -> u8 {
        match self.mistakes {
            0 => 3,
            1 | 2 => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::level::{NodeColor, NodeKind};

    /// The first tutorial layout: start and mid share a beat, the end node
    /// first syncs with them at t=4000
    fn tutorial() -> LevelConfig {
        let node = |id: &str, x: f32, interval: u32, offset: u32, kind: NodeKind| GameNode {
            id: id.into(),
            x,
            y: 50.0,
            interval,
            offset,
            kind,
            color: NodeColor::Cyan,
        };
        LevelConfig {
            id: "tutorial-1".into(),
            name: "First Breath".into(),
            description: String::new(),
            nodes: vec![
                node("n1", 20.0, 2000, 0, NodeKind::Start),
                node("n2", 50.0, 2000, 0, NodeKind::Basic),
                node("n3", 80.0, 3000, 2000, NodeKind::End),
            ],
            connections: Vec::new(),
        }
    }

    #[test]
    fn test_rejects_malformed_level() {
        let mut level = tutorial();
        level.nodes.pop();
        assert_eq!(Session::new(level).unwrap_err(), LevelError::MissingEnd);
    }

    #[test]
    fn test_solve_tutorial() {
        let mut session = Session::new(tutorial()).unwrap();

        // n1 -> n2 at t=0, both on peak
        assert!(session.begin_drag(Vec2::new(20.0, 50.0)));
        let attempt = session.release(Vec2::new(50.0, 50.0), 0);
        assert!(matches!(attempt, Attempt::Connected { solved: false, .. }));

        // n2 -> n3 must wait for the t=4000 sync
        assert!(session.begin_drag(Vec2::new(50.0, 50.0)));
        let attempt = session.release(Vec2::new(80.0, 50.0), 4000);
        assert!(matches!(attempt, Attempt::Connected { solved: true, .. }));
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.mistakes(), 0);
        assert_eq!(session.stars(), 3);
    }

    #[test]
    fn test_miss_increments_mistakes() {
        let mut session = Session::new(tutorial()).unwrap();
        assert!(session.begin_drag(Vec2::new(20.0, 50.0)));
        // t=1000: n1 is mid-cycle, outside its window
        let attempt = session.release(Vec2::new(50.0, 50.0), 1000);
        assert_eq!(attempt, Attempt::Rejected(RejectReason::OutOfPhase));
        assert_eq!(session.mistakes(), 1);
        assert!(session.connections().is_empty());
    }

    #[test]
    fn test_invalid_origin_ignored_without_attempt() {
        let mut session = Session::new(tutorial()).unwrap();
        // n2 is not connected yet, so it cannot originate a drag
        assert!(!session.begin_drag(Vec2::new(50.0, 50.0)));
        assert_eq!(session.release(Vec2::new(80.0, 50.0), 0), Attempt::Ignored);
        assert_eq!(session.mistakes(), 0);
    }

    #[test]
    fn test_duplicate_release_is_not_a_mistake() {
        let mut session = Session::new(tutorial()).unwrap();
        session.begin_drag(Vec2::new(20.0, 50.0));
        session.release(Vec2::new(50.0, 50.0), 0);
        assert_eq!(session.connections().len(), 1);

        // Re-linking the same pair, in reverse, changes nothing
        session.begin_drag(Vec2::new(50.0, 50.0));
        let attempt = session.release(Vec2::new(20.0, 50.0), 2000);
        assert_eq!(attempt, Attempt::Rejected(RejectReason::Duplicate));
        assert_eq!(session.mistakes(), 0);
        assert_eq!(session.connections().len(), 1);
    }

    #[test]
    fn test_release_off_board_is_ignored() {
        let mut session = Session::new(tutorial()).unwrap();
        session.begin_drag(Vec2::new(20.0, 50.0));
        assert_eq!(session.release(Vec2::new(35.0, 10.0), 0), Attempt::Ignored);
        assert_eq!(session.mistakes(), 0);
        // Drag is consumed either way
        assert!(session.drag_origin().is_none());
    }

    #[test]
    fn test_reset_restores_presets_and_counters() {
        let mut level = tutorial();
        let preset = Connection::new(&level.nodes[0], &level.nodes[1], 0);
        level.connections.push(preset);
        let mut session = Session::new(level).unwrap();

        session.begin_drag(Vec2::new(50.0, 50.0));
        session.release(Vec2::new(80.0, 50.0), 1000); // miss
        session.begin_drag(Vec2::new(50.0, 50.0));
        session.release(Vec2::new(80.0, 50.0), 4000);
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.mistakes(), 1);

        session.reset();
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.mistakes(), 0);
        assert_eq!(session.connections().len(), 1); // preset survives reset
    }

    #[test]
    fn test_pair_uniqueness_after_many_attempts() {
        let mut session = Session::new(tutorial()).unwrap();
        let points = [
            Vec2::new(20.0, 50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(80.0, 50.0),
        ];
        // Hammer every pair at a mix of good and bad times
        for t in (0..20_000).step_by(500) {
            for a in points {
                for b in points {
                    if session.begin_drag(a) {
                        session.release(b, t);
                    }
                }
            }
        }
        let conns = session.connections();
        for (i, c) in conns.iter().enumerate() {
            for other in &conns[i + 1..] {
                assert!(!other.links(&c.from, &c.to), "duplicate pair {}", c.id);
            }
        }
    }

    #[test]
    fn test_stars_thresholds() {
        let mut session = Session::new(tutorial()).unwrap();
        assert_eq!(session.stars(), 3);
        for _ in 0..2 {
            session.begin_drag(Vec2::new(20.0, 50.0));
            session.release(Vec2::new(50.0, 50.0), 1000);
        }
        assert_eq!(session.stars(), 2);
        session.begin_drag(Vec2::new(20.0, 50.0));
        session.release(Vec2::new(50.0, 50.0), 1000);
        assert_eq!(session.stars(), 1);
    }
}
