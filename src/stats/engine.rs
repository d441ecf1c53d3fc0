//! Query façade over one dataset snapshot.
//!
//! [`StatsEngine`] borrows a [`Dataset`] and memoises computed statistics in
//! a [`StatsCache`], so the same `(player, filter)` pair is aggregated once
//! per engine, e.g. when a stat sheet and its achievements are both shown.

use std::sync::Arc;

use tracing::debug;

use super::achievements::{unlocked_achievements, Achievement};
use super::filter::{player_performances, StatsFilter};
use super::progression::{compute_progression, ProgressionPoint};
use super::report::{compute_stats, CalculatedStats};
use crate::cli::types::PlayerId;
use crate::core::cache::{StatsCache, StatsCacheKey};
use crate::records::{Dataset, Player};

pub struct StatsEngine<'a> {
    dataset: &'a Dataset,
    cache: StatsCache,
}

impl<'a> StatsEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            cache: StatsCache::default(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn cache(&self) -> &StatsCache {
        &self.cache
    }

    /// Statistics for `player_id` under `filter`.
    pub fn stats(&self, player_id: PlayerId, filter: &StatsFilter) -> Arc<CalculatedStats> {
        let key = StatsCacheKey::new(player_id, filter);
        self.cache.get_or_insert_with(key, || {
            let stats = compute_stats(
                player_id,
                &self.dataset.matches,
                &self.dataset.tournaments,
                filter,
            );
            debug!(
                player = %player_id,
                matches = stats.counters.matches,
                performances = stats.performances.len(),
                "computed stats"
            );
            stats
        })
    }

    pub fn career_stats(&self, player_id: PlayerId) -> Arc<CalculatedStats> {
        self.stats(player_id, &StatsFilter::career())
    }

    /// Progression over every match the player appears in, ignoring filters.
    pub fn progression(&self, player_id: PlayerId) -> Vec<ProgressionPoint> {
        let performances = player_performances(player_id, &self.dataset.matches);
        compute_progression(&performances, &self.dataset.matches)
    }

    /// Achievements unlocked within `filter`.
    pub fn achievements(&self, player: &Player, filter: &StatsFilter) -> Vec<&'static Achievement> {
        unlocked_achievements(player, &self.stats(player.id, filter))
    }

    /// Achievements unlocked over the whole career.
    pub fn career_achievements(&self, player: &Player) -> Vec<&'static Achievement> {
        self.achievements(player, &StatsFilter::career())
    }
}
