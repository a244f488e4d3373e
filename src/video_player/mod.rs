// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for the media card.
//!
//! FFmpeg decodes on a blocking thread and frames reach the UI through an
//! Iced subscription. There is no audio output.

mod decoder;
pub mod subscription;
pub mod transport;

pub use decoder::{
    init_ffmpeg, AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, MediaSource,
};
pub use subscription::{media_playback, MediaHandle, PlaybackMessage, PlaybackSession};
pub use transport::{Transition, Transport};
