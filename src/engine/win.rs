//! Win condition: is any end node reachable from a start node?

use std::collections::{HashSet, VecDeque};

use super::level::{Connection, LevelConfig, NodeKind};

/// Breadth-first reachability over the connection set.
///
/// Connections are treated as undirected here even though each one records a
/// `from`/`to`. Order of insertion never matters, and cycles terminate via
/// the visited set.
pub fn is_solved(level: &LevelConfig, connections: &[Connection]) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = level
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Start)
        .map(|n| n.id.as_str())
        .collect();

    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        if level.node(id).is_some_and(|n| n.kind == NodeKind::End) {
            return true;
        }
        for conn in connections {
            if conn.from == id && !visited.contains(conn.to.as_str()) {
                queue.push_back(&conn.to);
            }
            if conn.to == id && !visited.contains(conn.from.as_str()) {
                queue.push_back(&conn.from);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::level::{Connection, GameNode, NodeColor};

    fn node(id: &str, kind: NodeKind) -> GameNode {
        GameNode {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            interval: 2000,
            offset: 0,
            kind,
            color: NodeColor::Cyan,
        }
    }

    fn conn(from: &str, to: &str) -> Connection {
        Connection {
            id: format!("{from}-{to}"),
            from: from.into(),
            to: to.into(),
            color: NodeColor::Cyan,
            created_at: 0,
        }
    }

    fn chain_level() -> LevelConfig {
        LevelConfig {
            id: "t".into(),
            name: "t".into(),
            description: String::new(),
            nodes: vec![
                node("s", NodeKind::Start),
                node("b1", NodeKind::Basic),
                node("b2", NodeKind::Basic),
                node("e", NodeKind::End),
            ],
            connections: Vec::new(),
        }
    }

    #[test]
    fn test_no_connections_is_unsolved() {
        assert!(!is_solved(&chain_level(), &[]));
    }

    #[test]
    fn test_full_chain_solves() {
        let conns = [conn("s", "b1"), conn("b1", "b2"), conn("b2", "e")];
        assert!(is_solved(&chain_level(), &conns));
    }

    #[test]
    fn test_partial_chain_does_not_solve() {
        let conns = [conn("s", "b1"), conn("b1", "b2")];
        assert!(!is_solved(&chain_level(), &conns));
    }

    #[test]
    fn test_disconnected_component_does_not_solve() {
        // b2-e exists but is not reachable from the start
        let conns = [conn("s", "b1"), conn("b2", "e")];
        assert!(!is_solved(&chain_level(), &conns));
    }

    #[test]
    fn test_edges_traverse_both_directions() {
        // Edge direction recorded backwards relative to the walk
        let conns = [conn("b1", "s"), conn("e", "b1")];
        assert!(is_solved(&chain_level(), &conns));
    }

    #[test]
    fn test_cycle_terminates() {
        let conns = [conn("s", "b1"), conn("b1", "b2"), conn("b2", "s")];
        assert!(!is_solved(&chain_level(), &conns));
    }

    #[test]
    fn test_order_independent() {
        let mut conns = vec![conn("s", "b1"), conn("b1", "b2"), conn("b2", "e")];
        let level = chain_level();
        assert!(is_solved(&level, &conns));
        conns.reverse();
        assert!(is_solved(&level, &conns));
        conns.swap(0, 1);
        assert!(is_solved(&level, &conns));
    }
}
