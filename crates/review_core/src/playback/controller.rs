//! # Playback Controller
//!
//! Owns what is selected, where it sits in the filtered list, and whether
//! playback is advancing. Every selection change bumps `play_request_token`;
//! the token, not the numeric target time, is what tells a video surface to
//! issue a seek, because backends may treat an unchanged target as a no-op.

use serde::Serialize;

use crate::models::{MatchEvent, MatchInfo};

use super::start_time::adjusted_start;

/// Index value meaning "the selection is not a member of the filtered list".
pub const OUTSIDE_LIST: i32 = -1;

#[derive(Debug, Clone)]
pub struct PlaybackController {
    selected: Option<MatchEvent>,
    current_index: i32,
    current_time: f64,
    is_playing: bool,
    play_request_token: u64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            selected: None,
            current_index: OUTSIDE_LIST,
            current_time: 0.0,
            is_playing: false,
            play_request_token: 0,
        }
    }

    /// Back to `Idle`, as on a match switch. The token is not reset; it
    /// stays monotone across matches so a driver never mistakes a fresh
    /// selection for a stale one.
    pub fn reset(&mut self) {
        self.selected = None;
        self.current_index = OUTSIDE_LIST;
        self.current_time = 0.0;
        self.is_playing = false;
    }

    /// Select the first event of the filtered list and start playing.
    /// No-op on an empty list.
    pub fn play_filtered(&mut self, filtered: &[MatchEvent], info: &MatchInfo) -> bool {
        match filtered.first() {
            Some(first) => {
                let event = first.clone();
                self.select(event, 0, info);
                true
            }
            None => false,
        }
    }

    /// Advance to the next event. At the last index playback stops and the
    /// index stays put; no wrap.
    pub fn play_next(&mut self, filtered: &[MatchEvent], info: &MatchInfo) -> bool {
        if filtered.is_empty() {
            return false;
        }
        let last = filtered.len() as i32 - 1;
        if self.current_index >= last {
            self.is_playing = false;
            return false;
        }
        let next = (self.current_index + 1).clamp(0, last);
        let event = filtered[next as usize].clone();
        self.select(event, next, info);
        true
    }

    /// Step back one event. A no-op at (or before) the first index.
    pub fn play_prev(&mut self, filtered: &[MatchEvent], info: &MatchInfo) -> bool {
        if filtered.is_empty() || self.current_index <= 0 {
            return false;
        }
        let prev = self.current_index - 1;
        let event = filtered[prev as usize].clone();
        self.select(event, prev, info);
        true
    }

    /// Play a specific event. Located in the filtered list by exact
    /// `(timestamp, type, match)` identity, then by `(timestamp, type)`
    /// alone; an event absent from the list (selection from an unfiltered
    /// view) is still played, with the index parked outside the list.
    pub fn play_event(&mut self, target: &MatchEvent, filtered: &[MatchEvent], info: &MatchInfo) {
        let index = filtered
            .iter()
            .position(|e| {
                e.timestamp_sec == target.timestamp_sec
                    && e.event_type == target.event_type
                    && e.match_id == target.match_id
            })
            .or_else(|| {
                filtered.iter().position(|e| {
                    e.timestamp_sec == target.timestamp_sec && e.event_type == target.event_type
                })
            });
        match index {
            Some(i) => {
                let event = filtered[i].clone();
                self.select(event, i as i32, info);
            }
            None => self.select(target.clone(), OUTSIDE_LIST, info),
        }
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Display-only feedback from the polled video surface. Never touches
    /// filtering or the selection.
    pub fn set_current_time(&mut self, time_seconds: f64) {
        if time_seconds.is_finite() {
            self.current_time = time_seconds;
        }
    }

    pub fn selected_event(&self) -> Option<&MatchEvent> {
        self.selected.as_ref()
    }

    pub fn current_index(&self) -> i32 {
        self.current_index
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn play_request_token(&self) -> u64 {
        self.play_request_token
    }

    /// Snapshot for the surrounding UI layer.
    pub fn playback_info(&self) -> PlaybackInfo {
        PlaybackInfo {
            current_time_seconds: self.current_time,
            current_index: self.current_index,
            is_playing: self.is_playing,
            play_request_token: self.play_request_token,
            selected_event_id: self.selected.as_ref().map(|e| e.id),
        }
    }

    /// Single transition point: selection, adjusted time, playing flag and
    /// token move together in one synchronous step, so a driver always
    /// observes the token change after the matching time/selection update.
    fn select(&mut self, event: MatchEvent, index: i32, info: &MatchInfo) {
        self.current_time = adjusted_start(&event, info);
        self.selected = Some(event);
        self.current_index = index;
        self.is_playing = true;
        self.play_request_token += 1;
    }
}

/// Serializable playback snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackInfo {
    pub current_time_seconds: f64,
    pub current_index: i32,
    pub is_playing: bool,
    pub play_request_token: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_event_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered() -> Vec<MatchEvent> {
        vec![
            MatchEvent::new(1, "TACKLE", 12.0),
            MatchEvent::new(2, "KICK", 30.0),
            MatchEvent::new(3, "TRY", 81.5),
        ]
    }

    #[test]
    fn test_play_filtered_selects_first() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        assert!(pc.play_filtered(&filtered(), &info));
        assert_eq!(pc.current_index(), 0);
        assert_eq!(pc.current_time(), 12.0);
        assert!(pc.is_playing());
        assert_eq!(pc.play_request_token(), 1);
    }

    #[test]
    fn test_play_filtered_empty_is_noop() {
        let mut pc = PlaybackController::new();
        assert!(!pc.play_filtered(&[], &MatchInfo::default()));
        assert!(pc.selected_event().is_none());
        assert_eq!(pc.play_request_token(), 0);
    }

    #[test]
    fn test_play_next_stops_at_end() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        pc.play_filtered(&list, &info);
        assert!(pc.play_next(&list, &info));
        assert!(pc.play_next(&list, &info));
        assert_eq!(pc.current_index(), 2);
        let token = pc.play_request_token();

        // Past the end: playback stops, index holds, token holds.
        assert!(!pc.play_next(&list, &info));
        assert_eq!(pc.current_index(), 2);
        assert!(!pc.is_playing());
        assert_eq!(pc.play_request_token(), token);
    }

    #[test]
    fn test_play_prev_noop_at_start() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        pc.play_filtered(&list, &info);
        let token = pc.play_request_token();
        assert!(!pc.play_prev(&list, &info));
        assert_eq!(pc.current_index(), 0);
        assert_eq!(pc.play_request_token(), token);
    }

    #[test]
    fn test_play_event_exact_match() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        pc.play_event(&list[1].clone(), &list, &info);
        assert_eq!(pc.current_index(), 1);
        assert_eq!(pc.selected_event().unwrap().id, 2);
    }

    #[test]
    fn test_play_event_timestamp_type_fallback() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        // Same timestamp and type, different match id: the relaxed match
        // still lands on the list member.
        let mut target = list[2].clone();
        target.match_id = Some(77);
        target.id = 999;
        pc.play_event(&target, &list, &info);
        assert_eq!(pc.current_index(), 2);
        assert_eq!(pc.selected_event().unwrap().id, 3);
    }

    #[test]
    fn test_play_event_outside_list() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        let outside = MatchEvent::new(50, "SCRUM", 200.0);
        pc.play_event(&outside, &list, &info);
        assert_eq!(pc.current_index(), OUTSIDE_LIST);
        assert_eq!(pc.selected_event().unwrap().id, 50);
        assert!(pc.current_time().is_finite());
        assert!(pc.is_playing());
    }

    #[test]
    fn test_unresolvable_start_still_selects() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let mut broken = MatchEvent::new(9, "SCRUM", f64::NAN);
        pc.play_event(&broken.clone(), &[], &info);
        assert_eq!(pc.current_time(), 0.0);
        assert_eq!(pc.play_request_token(), 1);

        broken.timestamp_sec = None;
        pc.play_event(&broken, &[], &info);
        assert_eq!(pc.current_time(), 0.0);
        assert_eq!(pc.play_request_token(), 2);
    }

    #[test]
    fn test_token_strictly_increases() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        let list = filtered();
        let mut last = pc.play_request_token();
        pc.play_filtered(&list, &info);
        assert!(pc.play_request_token() > last);
        last = pc.play_request_token();
        pc.play_next(&list, &info);
        assert!(pc.play_request_token() > last);
        last = pc.play_request_token();
        pc.play_prev(&list, &info);
        assert!(pc.play_request_token() > last);
        last = pc.play_request_token();
        // Re-selecting the same event keeps the same numeric time but must
        // still bump the token.
        pc.play_event(&list[0].clone(), &list, &info);
        assert!(pc.play_request_token() > last);
    }

    #[test]
    fn test_delay_applied_on_selection() {
        let mut pc = PlaybackController::new();
        let mut info = MatchInfo::default();
        info.global_delay_seconds = 3.0;
        info.event_delays.insert("TACKLE".into(), 1.5);
        let list = filtered();
        pc.play_filtered(&list, &info);
        assert_eq!(pc.current_time(), 16.5);
    }

    #[test]
    fn test_reset_keeps_token_monotone() {
        let mut pc = PlaybackController::new();
        let info = MatchInfo::default();
        pc.play_filtered(&filtered(), &info);
        let token = pc.play_request_token();
        pc.reset();
        assert!(pc.selected_event().is_none());
        assert_eq!(pc.current_index(), OUTSIDE_LIST);
        assert_eq!(pc.play_request_token(), token);
    }
}
