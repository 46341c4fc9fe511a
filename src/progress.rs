//! Journey progress: best star rating per level
//!
//! Persisted as a small JSON map. Load is forgiving - a missing or corrupt
//! file just means a fresh profile - and save is best-effort with a log line,
//! never a gameplay error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::levels::TOTAL_LEVELS;

/// Best star ratings keyed by level index (1-3; unplayed levels are absent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    pub best: BTreeMap<u32, u8>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best rating for a level, 0 if unplayed
    pub fn stars(&self, index: u32) -> u8 {
        self.best.get(&index).copied().unwrap_or(0)
    }

    /// Record a finished attempt. Only improvements are kept; returns whether
    /// the stored rating changed.
    pub fn record(&mut self, index: u32, stars: u8) -> bool {
        let stars = stars.min(3);
        if stars > self.stars(index) {
            self.best.insert(index, stars);
            true
        } else {
            false
        }
    }

    /// A level is playable once the previous one has been played (or it was
    /// already played itself). Level 0 is always open.
    pub fn is_unlocked(&self, index: u32) -> bool {
        index == 0 || self.best.contains_key(&(index - 1)) || self.best.contains_key(&index)
    }

    /// Number of levels with any rating
    pub fn levels_played(&self) -> usize {
        self.best.len()
    }

    /// Overall completion in [0, 1]
    pub fn completion(&self) -> f32 {
        self.best.len() as f32 / TOTAL_LEVELS as f32
    }

    /// Load progress from disk, falling back to a fresh profile
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Progress>(&json) {
                Ok(progress) => {
                    log::info!("loaded progress for {} levels", progress.best.len());
                    progress
                }
                Err(err) => {
                    log::warn!("progress file unreadable ({err}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("no progress file, starting fresh");
                Self::new()
            }
        }
    }

    /// Save progress to disk (best-effort)
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save progress: {err}");
                } else {
                    log::info!("progress saved ({} levels)", self.best.len());
                }
            }
            Err(err) => log::warn!("failed to serialize progress: {err}"),
        }
    }
}
