// SPDX-License-Identifier: MPL-2.0
//! Play/pause/seek bookkeeping for the decoder loop.
//!
//! The decoder thread owns the media position; this type decides what each
//! command means for the demuxer so the rules can be tested without FFmpeg.

use super::decoder::DecoderCommand;

/// What the decoder loop must do in response to a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Nothing changes.
    None,
    /// Start delivering frames, optionally repositioning the demuxer first.
    Resume { seek_to: Option<f64> },
    /// Stop delivering frames; the position is kept.
    Halt,
    /// Reposition the demuxer. `preview` asks for one frame while paused.
    Seek { target_secs: f64, preview: bool },
    /// Leave the decoder loop.
    Shutdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transport {
    playing: bool,
    position_secs: f64,
    ended: bool,
}

impl Transport {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position of the last delivered frame or seek target, in seconds.
    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.ended
    }

    pub fn apply(&mut self, command: &DecoderCommand) -> Transition {
        match *command {
            DecoderCommand::Play => {
                if self.playing {
                    return Transition::None;
                }
                self.playing = true;
                if self.ended {
                    self.ended = false;
                    self.position_secs = 0.0;
                    Transition::Resume { seek_to: Some(0.0) }
                } else if self.position_secs > 0.0 {
                    Transition::Resume {
                        seek_to: Some(self.position_secs),
                    }
                } else {
                    Transition::Resume { seek_to: None }
                }
            }
            DecoderCommand::Pause => {
                if !self.playing {
                    return Transition::None;
                }
                self.playing = false;
                Transition::Halt
            }
            DecoderCommand::Seek { target_secs } => {
                let target_secs = target_secs.max(0.0);
                self.position_secs = target_secs;
                self.ended = false;
                Transition::Seek {
                    target_secs,
                    preview: !self.playing,
                }
            }
            DecoderCommand::Stop => {
                self.playing = false;
                Transition::Shutdown
            }
        }
    }

    /// Records the timestamp of a frame that was just delivered.
    pub fn on_frame(&mut self, pts_secs: f64) {
        self.position_secs = pts_secs;
    }

    /// Records that the demuxer ran out of packets.
    pub fn on_end(&mut self) {
        self.playing = false;
        self.ended = true;
    }
}
