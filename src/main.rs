//! Pulse & Path headless driver
//!
//! The playable game lives in a rendering shell elsewhere; this binary
//! exercises the engine directly: print any level as JSON, or autoplay one
//! against a simulated clock.
//!
//! Usage:
//!   pulse-path [INDEX]          print the level for INDEX as JSON
//!   pulse-path --demo [INDEX]   autoplay the level and report the result

use glam::Vec2;

use pulse_path::engine::connect::can_originate;
use pulse_path::{Attempt, NodeKind, Session, get_level};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--demo") => {
            let index = parse_index(args.get(1));
            demo(index);
        }
        Some(raw) => match raw.parse::<u32>() {
            Ok(index) => print_level(index),
            Err(_) => eprintln!("usage: pulse-path [--demo] [INDEX]"),
        },
        None => print_level(0),
    }
}

fn parse_index(arg: Option<&String>) -> u32 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(12)
}

fn print_level(index: u32) {
    let level = get_level(index);
    match serde_json::to_string_pretty(&level) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize level {index}: {err}"),
    }
}

/// Autoplay: every 50ms of game time, connect the first reached node that
/// shares a live window with a compatible unlinked neighbor.
fn demo(index: u32) {
    let level = get_level(index);
    println!("{} - {}: {}", level.id, level.name, level.description);

    let mut session = match Session::new(level) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("level {index} failed validation: {err}");
            return;
        }
    };

    for t in (0..180_000u64).step_by(50) {
        let mut pick: Option<(Vec2, Vec2)> = None;
        'scan: for a in &session.level().nodes {
            if !can_originate(a, session.connections()) || !session.node_active(a, t) {
                continue;
            }
            for b in &session.level().nodes {
                if a.id == b.id
                    || session.connections().iter().any(|c| c.links(&a.id, &b.id))
                    || (a.color != b.color && b.kind != NodeKind::Prism)
                    || !session.node_active(b, t)
                {
                    continue;
                }
                pick = Some((a.pos(), b.pos()));
                break 'scan;
            }
        }

        let Some((from, to)) = pick else { continue };
        if !session.begin_drag(from) {
            continue;
        }
        if let Attempt::Connected { connection, solved } = session.release(to, t) {
            println!("t={t:>6}ms  {}", connection.id);
            if solved {
                println!(
                    "solved in {:.1}s with {} mistakes ({} stars)",
                    t as f32 / 1000.0,
                    session.mistakes(),
                    session.stars()
                );
                return;
            }
        }
    }
    println!("demo clock expired before a solution");
}
