//! Embedded streaming widget backend.
//!
//! The widget lives outside this process and is driven through an outgoing
//! command queue the rendering layer drains. Current time is only as fresh
//! as the widget's last report.

use std::collections::VecDeque;

use super::{VideoError, VideoSurface};

/// Command forwarded to the external widget.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Seek(f64),
    Play,
    Pause,
}

#[derive(Debug, Default)]
pub struct EmbeddedStreamPlayer {
    commands: VecDeque<PlayerCommand>,
    last_reported_time: f64,
    detached: bool,
}

impl EmbeddedStreamPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called by the rendering layer to forward queued commands to the widget.
    pub fn drain_commands(&mut self) -> Vec<PlayerCommand> {
        self.commands.drain(..).collect()
    }

    /// Widget time report callback.
    pub fn report_time(&mut self, time_seconds: f64) {
        if time_seconds.is_finite() {
            self.last_reported_time = time_seconds;
        }
    }

    /// The widget handle went away (page teardown, embed error).
    pub fn mark_detached(&mut self) {
        self.detached = true;
        self.commands.clear();
    }

    fn push(&mut self, command: PlayerCommand) -> Result<(), VideoError> {
        if self.detached {
            return Err(VideoError::Detached);
        }
        self.commands.push_back(command);
        Ok(())
    }
}

impl VideoSurface for EmbeddedStreamPlayer {
    fn seek(&mut self, time_seconds: f64) -> Result<(), VideoError> {
        if !time_seconds.is_finite() {
            return Err(VideoError::Rejected(format!("non-finite seek target: {time_seconds}")));
        }
        self.push(PlayerCommand::Seek(time_seconds.max(0.0)))
    }

    fn play(&mut self) -> Result<(), VideoError> {
        self.push(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<(), VideoError> {
        self.push(PlayerCommand::Pause)
    }

    fn current_time(&self) -> f64 {
        self.last_reported_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_queue_in_order() {
        let mut player = EmbeddedStreamPlayer::new();
        player.seek(54.0).unwrap();
        player.play().unwrap();
        assert_eq!(
            player.drain_commands(),
            vec![PlayerCommand::Seek(54.0), PlayerCommand::Play]
        );
        assert!(player.drain_commands().is_empty());
    }

    #[test]
    fn test_time_comes_from_reports() {
        let mut player = EmbeddedStreamPlayer::new();
        player.seek(54.0).unwrap();
        assert_eq!(player.current_time(), 0.0);
        player.report_time(54.2);
        assert_eq!(player.current_time(), 54.2);
        player.report_time(f64::NAN);
        assert_eq!(player.current_time(), 54.2);
    }

    #[test]
    fn test_negative_seek_clamped() {
        let mut player = EmbeddedStreamPlayer::new();
        player.seek(-3.0).unwrap();
        assert_eq!(player.drain_commands(), vec![PlayerCommand::Seek(0.0)]);
    }

    #[test]
    fn test_detached_rejects() {
        let mut player = EmbeddedStreamPlayer::new();
        player.mark_detached();
        assert!(matches!(player.seek(10.0), Err(VideoError::Detached)));
        assert!(matches!(player.play(), Err(VideoError::Detached)));
    }
}
