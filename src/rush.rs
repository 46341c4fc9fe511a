//! Pulse Rush - the countdown arcade mode
//!
//! Runs beside a normal session: a 1 Hz countdown that only ever decrements
//! its own counter and flips to game-over at zero. It never touches the
//! engine's data; solving a level just buys time and picks the next index.
//! Level picks are the one intentionally non-deterministic part of the game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{RUSH_BONUS_SECS, RUSH_CAP_SECS, RUSH_START_SECS};

/// State for one Rush run
#[derive(Debug, Clone)]
pub struct RushMode {
    remaining_secs: u32,
    score: u32,
    level_index: u32,
    rng: Pcg32,
}

impl RushMode {
    /// Start a run; opens on a level from the easy band
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level_index = rng.random_range(0..50);
        log::info!("rush run started at level {level_index}");
        Self {
            remaining_secs: RUSH_START_SECS,
            score: 0,
            level_index,
            rng,
        }
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_over(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Called when the current level is solved: bank the point, buy time,
    /// and pick the next level. Returns the next index.
    pub fn on_level_solved(&mut self) -> u32 {
        self.score += 1;
        self.remaining_secs = (self.remaining_secs + RUSH_BONUS_SECS).min(RUSH_CAP_SECS);
        self.level_index = self.rng.random_range(0..100);
        self.level_index
    }

    /// Advance the countdown by one second; true when the run just ended
    pub fn tick_second(&mut self) -> bool {
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        self.remaining_secs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_reaches_game_over() {
        let mut rush = RushMode::new(1);
        assert_eq!(rush.remaining_secs(), RUSH_START_SECS);
        for _ in 0..RUSH_START_SECS - 1 {
            assert!(!rush.tick_second());
        }
        assert!(rush.tick_second());
        assert!(rush.is_over());
        // Further ticks stay at zero
        assert!(rush.tick_second());
        assert_eq!(rush.remaining_secs(), 0);
    }

    #[test]
    fn test_solve_banks_score_and_time() {
        let mut rush = RushMode::new(2);
        for _ in 0..40 {
            rush.tick_second();
        }
        assert_eq!(rush.remaining_secs(), 20);
        rush.on_level_solved();
        assert_eq!(rush.score(), 1);
        assert_eq!(rush.remaining_secs(), 30);
    }

    #[test]
    fn test_time_bonus_capped() {
        let mut rush = RushMode::new(3);
        for _ in 0..5 {
            rush.on_level_solved();
        }
        assert_eq!(rush.score(), 5);
        assert_eq!(rush.remaining_secs(), RUSH_CAP_SECS);
    }

    #[test]
    fn test_level_picks_stay_in_band() {
        let mut rush = RushMode::new(4);
        assert!(rush.level_index() < 50);
        for _ in 0..50 {
            assert!(rush.on_level_solved() < 100);
        }
    }
}
