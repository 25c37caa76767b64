//! Aggregated results of a run of games

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::error::ClientError;
use super::runner::{GameEnd, GameRecord};

/// Distribution of moves per game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveStats {
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
}

impl MoveStats {
    /// `None` for an empty sample
    pub fn from_counts(counts: &[u32]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }

        let n = counts.len() as f64;
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
        let variance = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            min: counts.iter().copied().min().unwrap_or(0),
            max: counts.iter().copied().max().unwrap_or(0),
        })
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub games_requested: u32,
    pub records: Vec<GameRecord>,
    /// Set when a game could not be started and the run stopped
    pub aborted: Option<ClientError>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(run_id: Uuid, started_at: DateTime<Utc>, games_requested: u32) -> Self {
        Self {
            run_id,
            started_at,
            games_requested,
            records: Vec::new(),
            aborted: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn games_played(&self) -> usize {
        self.records.len()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Games per winner label
    pub fn winner_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for label in self.records.iter().filter_map(|r| r.end.winner()) {
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn decided(&self) -> usize {
        self.count(|end| end.winner().is_some())
    }

    pub fn capped(&self) -> usize {
        self.count(|end| matches!(end, GameEnd::MoveCapReached))
    }

    pub fn ended_early(&self) -> usize {
        self.count(GameEnd::is_early)
    }

    pub fn count(&self, predicate: impl Fn(&GameEnd) -> bool) -> usize {
        self.records.iter().filter(|r| predicate(&r.end)).count()
    }

    pub fn move_stats(&self) -> Option<MoveStats> {
        let counts: Vec<u32> = self.records.iter().map(|r| r.moves).collect();
        MoveStats::from_counts(&counts)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Run Summary ===")?;
        writeln!(f, "Run: {} (started {})", self.run_id, self.started_at.to_rfc3339())?;
        writeln!(f, "Games played: {}/{}", self.games_played(), self.games_requested)?;
        if let Some(err) = &self.aborted {
            writeln!(f, "Aborted: {}", err)?;
        }
        writeln!(f, "Total time: {:?}", self.elapsed)?;
        if self.games_played() > 0 {
            writeln!(f, "Average time per game: {:?}", self.elapsed / self.games_played() as u32)?;
        }

        writeln!(f, "Decided: {}, move cap: {}, ended early: {}", self.decided(), self.capped(), self.ended_early())?;
        for (label, count) in self.winner_counts() {
            let share = count as f64 / self.games_played() as f64 * 100.0;
            writeln!(f, "  {}: {} ({:.1}%)", label, count, share)?;
        }

        if let Some(stats) = self.move_stats() {
            writeln!(
                f,
                "Moves per game: mean={:.2}, std={:.2}, min={}, max={}",
                stats.mean, stats.std_dev, stats.min, stats.max
            )?;
        }

        Ok(())
    }
}
