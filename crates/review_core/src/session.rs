//! # Review Session
//!
//! The single session-scoped owner: event store, match metadata, filter
//! state, the published filtered view, and playback state. Everything is
//! explicit, passed-down state; nothing here is global.
//!
//! Match loading is guarded by a request generation: a fetch that resolves
//! after a newer `begin_match_load` call is discarded, so out-of-order
//! responses can never overwrite the newer match's state.

use crate::filter::{compute_filtered_events, same_filtered_content, FilterDescriptor, FilterState};
use crate::models::{MatchEvent, MatchInfo};
use crate::playback::{PlaybackController, PlaybackInfo};
use crate::teams::{classify_teams, TeamSheet};

#[derive(Debug, Default)]
pub struct ReviewSession {
    events: Vec<MatchEvent>,
    match_info: MatchInfo,
    teams: TeamSheet,
    filter: FilterState,
    filtered: Vec<MatchEvent>,
    filtered_revision: u64,
    playback: PlaybackController,
    load_generation: u64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            playback: PlaybackController::new(),
            ..Self::default()
        }
    }

    // ========================
    // Match loading
    // ========================

    /// Start loading a match. The returned generation must accompany the
    /// eventual `apply_match_data` call; a newer `begin_match_load`
    /// invalidates it.
    pub fn begin_match_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Install fetched match data. Returns `false` (and changes nothing)
    /// when the generation was superseded while the fetch was in flight.
    pub fn apply_match_data(
        &mut self,
        generation: u64,
        events: Vec<MatchEvent>,
        info: MatchInfo,
    ) -> bool {
        if generation != self.load_generation {
            log::warn!(
                "discarding stale match data (generation {generation}, current {})",
                self.load_generation
            );
            return false;
        }
        self.match_info = info;
        self.events = events;
        self.teams = classify_teams(&self.match_info, &self.events);
        self.filter = FilterState::new();
        self.playback.reset();
        self.refresh_filtered();
        true
    }

    // ========================
    // Filter surface
    // ========================

    pub fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.set_categories(categories);
        self.refresh_filtered();
    }

    pub fn add_descriptor(&mut self, descriptor: FilterDescriptor) {
        self.filter.add_descriptor(descriptor);
        self.refresh_filtered();
    }

    pub fn remove_descriptor(&mut self, descriptor: &str, value: &str) {
        self.filter.remove_descriptor(descriptor, value);
        self.refresh_filtered();
    }

    pub fn set_selected_team(&mut self, team: Option<&str>) {
        self.filter.set_selected_team(team);
        self.refresh_filtered();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refresh_filtered();
    }

    // ========================
    // Read surface
    // ========================

    /// The current ordered event list.
    pub fn filtered_events(&self) -> &[MatchEvent] {
        &self.filtered
    }

    pub fn event_count(&self) -> usize {
        self.filtered.len()
    }

    /// Bumped only when the filtered content meaningfully changed.
    /// Downstream consumers re-render on this, not on every recompute.
    pub fn filtered_revision(&self) -> u64 {
        self.filtered_revision
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn teams(&self) -> &TeamSheet {
        &self.teams
    }

    pub fn match_info(&self) -> &MatchInfo {
        &self.match_info
    }

    // ========================
    // Playback surface
    // ========================

    pub fn play_filtered(&mut self) -> bool {
        self.playback.play_filtered(&self.filtered, &self.match_info)
    }

    pub fn play_next(&mut self) -> bool {
        self.playback.play_next(&self.filtered, &self.match_info)
    }

    pub fn play_prev(&mut self) -> bool {
        self.playback.play_prev(&self.filtered, &self.match_info)
    }

    pub fn play_event(&mut self, target: &MatchEvent) {
        self.playback.play_event(target, &self.filtered, &self.match_info);
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Poller feedback; display only.
    pub fn report_time(&mut self, time_seconds: f64) {
        self.playback.set_current_time(time_seconds);
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playback_info(&self) -> PlaybackInfo {
        self.playback.playback_info()
    }

    /// Recompute the filtered view; publish only on content change so
    /// downstream consumers are not re-rendered for identical lists.
    fn refresh_filtered(&mut self) {
        let next = compute_filtered_events(&self.events, &self.filter, &self.teams);
        if same_filtered_content(&self.filtered, &next) {
            return;
        }
        self.filtered = next;
        self.filtered_revision += 1;
    }
}
