//! Hand-authored tutorial-tier levels
//!
//! The first levels teach the mechanics one at a time: waiting for the sync,
//! polyrhythms, then prisms and anchors. The generator is never invoked for
//! these indices, so their layouts are stable across versions.

use crate::engine::level::{GameNode, LevelConfig, NodeColor, NodeKind};

/// Number of curated levels before the generator takes over
pub const COUNT: u32 = 12;

fn n(
    id: &str,
    x: f32,
    y: f32,
    interval: u32,
    offset: u32,
    kind: NodeKind,
    color: NodeColor,
) -> GameNode {
    GameNode {
        id: id.into(),
        x,
        y,
        interval,
        offset,
        kind,
        color,
    }
}

fn level(id: &str, name: &str, description: &str, nodes: Vec<GameNode>) -> LevelConfig {
    LevelConfig {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        nodes,
        connections: Vec::new(),
    }
}

/// Build the curated level for an index, or None past the tutorial tier
pub fn get(index: u32) -> Option<LevelConfig> {
    use NodeColor::*;
    use NodeKind::*;

    let lvl = match index {
        0 => level(
            "tutorial-1",
            "First Breath",
            "Wait for the sync. Connect Start to End.",
            vec![
                n("n1", 20.0, 50.0, 2000, 0, Start, Cyan),
                n("n2", 50.0, 50.0, 2000, 0, Basic, Cyan),
                // Syncs with the others at 4000ms
                n("n3", 80.0, 50.0, 3000, 2000, End, Cyan),
            ],
        ),
        1 => level(
            "tutorial-2",
            "Polyrhythm",
            "Different pulse speeds require patience.",
            vec![
                n("n1", 20.0, 80.0, 3000, 0, Start, Purple),
                n("n2", 50.0, 50.0, 2000, 500, Basic, Purple),
                n("n3", 80.0, 20.0, 4000, 0, End, Purple),
            ],
        ),
        2 => level(
            "level-3",
            "The Cascade",
            "Follow the rhythm down the line.",
            vec![
                n("s", 20.0, 20.0, 2500, 0, Start, Green),
                n("b1", 40.0, 40.0, 2500, 625, Basic, Green),
                n("b2", 60.0, 60.0, 2500, 1250, Basic, Green),
                n("e", 80.0, 80.0, 2500, 1875, End, Green),
            ],
        ),
        3 => level(
            "level-4",
            "Triangle Theory",
            "Three beats, one path.",
            vec![
                n("s", 50.0, 20.0, 2000, 0, Start, Amber),
                n("b1", 20.0, 70.0, 3000, 0, Basic, Amber),
                n("b2", 80.0, 70.0, 3000, 1500, Basic, Amber),
                n("e", 50.0, 50.0, 1500, 0, End, Amber),
            ],
        ),
        4 => level(
            "level-5",
            "The Cross",
            "Timing is everything where paths meet.",
            vec![
                n("s", 20.0, 50.0, 2000, 0, Start, Blue),
                n("mid", 50.0, 50.0, 1000, 500, Basic, Blue),
                n("b1", 50.0, 20.0, 2000, 1000, Basic, Blue),
                n("b2", 50.0, 80.0, 2000, 1000, Basic, Blue),
                n("e", 80.0, 50.0, 4000, 0, End, Blue),
            ],
        ),
        5 => level(
            "level-6",
            "Orbit",
            "Catch the satellite as it passes.",
            vec![
                n("s", 50.0, 50.0, 4000, 0, Start, Purple),
                n("b1", 50.0, 20.0, 2000, 0, Basic, Purple),
                n("b2", 80.0, 50.0, 2000, 500, Basic, Purple),
                n("b3", 50.0, 80.0, 2000, 1000, Basic, Purple),
                n("b4", 20.0, 50.0, 2000, 1500, Basic, Purple),
                n("e", 20.0, 20.0, 4000, 2000, End, Purple),
            ],
        ),
        6 => level(
            "level-7",
            "Binary Systems",
            "Two separate rhythms.",
            vec![
                n("s", 10.0, 50.0, 2000, 0, Start, Red),
                n("u1", 30.0, 30.0, 2000, 1000, Basic, Red),
                n("d1", 30.0, 70.0, 3000, 0, Basic, Red),
                n("mid", 50.0, 50.0, 6000, 0, Basic, Red),
                n("u2", 70.0, 30.0, 2000, 0, Basic, Red),
                n("d2", 70.0, 70.0, 3000, 1500, Basic, Red),
                n("e", 90.0, 50.0, 4000, 0, End, Red),
            ],
        ),
        7 => level(
            "level-8",
            "The Serpent",
            "A long winding road with a fast heartbeat.",
            vec![
                n("s", 10.0, 10.0, 1500, 0, Start, Green),
                n("b1", 30.0, 20.0, 1500, 500, Basic, Green),
                n("b2", 10.0, 40.0, 1500, 1000, Basic, Green),
                n("b3", 30.0, 60.0, 1500, 0, Basic, Green),
                n("b4", 10.0, 80.0, 1500, 500, Basic, Green),
                n("b5", 50.0, 90.0, 3000, 0, Basic, Green),
                n("b6", 90.0, 90.0, 3000, 1500, Basic, Green),
                n("e", 90.0, 10.0, 4500, 0, End, Green),
            ],
        ),
        8 => level(
            "level-9",
            "Constellation",
            "Find the path through the stars.",
            vec![
                n("s", 50.0, 50.0, 5000, 0, Start, Cyan),
                n("b1", 30.0, 20.0, 2500, 0, Basic, Cyan),
                n("b2", 70.0, 20.0, 3000, 0, Basic, Cyan),
                n("b3", 80.0, 60.0, 2000, 0, Basic, Cyan),
                n("b4", 20.0, 60.0, 4000, 0, Basic, Cyan),
                n("b5", 50.0, 85.0, 2500, 1250, Basic, Cyan),
                n("e", 50.0, 10.0, 5000, 2500, End, Cyan),
            ],
        ),
        9 => level(
            "level-10",
            "Zenith",
            "Perfect harmony required.",
            vec![
                n("s", 10.0, 90.0, 2000, 0, Start, Amber),
                n("b1", 25.0, 75.0, 2200, 0, Basic, Amber),
                n("b2", 40.0, 60.0, 2400, 0, Basic, Amber),
                n("b3", 55.0, 45.0, 2600, 0, Basic, Amber),
                n("b4", 70.0, 30.0, 2800, 0, Basic, Amber),
                n("e", 90.0, 10.0, 3000, 0, End, Amber),
            ],
        ),
        10 => level(
            "level-11",
            "The Prism",
            "Triangles transform the energy color. Match the output.",
            vec![
                n("s", 20.0, 50.0, 2000, 0, Start, Cyan),
                n("p1", 50.0, 50.0, 2000, 1000, Prism, Pink),
                n("e", 80.0, 50.0, 2000, 0, End, Pink),
            ],
        ),
        11 => level(
            "level-12",
            "The Anchor",
            "Squares hold the charge for 3 seconds, allowing easier sync.",
            vec![
                n("s", 20.0, 50.0, 1500, 0, Start, Green),
                n("a1", 50.0, 20.0, 1000, 0, Anchor, Green),
                n("e", 80.0, 50.0, 4000, 2500, End, Green),
            ],
        ),
        _ => return None,
    };
    Some(lvl)
}
