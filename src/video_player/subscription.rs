// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the async decoder to the UI event loop. The UI receives a
//! [`MediaHandle`] only once the source is open, so commands issued while
//! the media is still loading have nothing to go to and are dropped.

use super::{AsyncDecoder, DecoderCommand, DecoderEvent, MediaSource};
use crate::error::{Error, Result, VideoError};
use iced::futures::{SinkExt, Stream};
use iced::stream;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Non-owning command handle to a running decoder.
///
/// Cloneable; every clone talks to the same decoder. Sending fails once the
/// decoder has shut down.
#[derive(Clone)]
pub struct MediaHandle {
    commands: mpsc::UnboundedSender<DecoderCommand>,
}

impl MediaHandle {
    /// A handle paired with a receiver instead of a decoder.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        (Self { commands }, receiver)
    }

    pub fn send(&self, command: DecoderCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::Video(VideoError::Other("Video decoder not running".into())))
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.commands.is_closed()
    }
}

impl std::fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaHandle")
            .field("connected", &self.is_connected())
            .finish()
    }
}

/// Messages emitted by the playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// The source is open; commands can be sent through the handle.
    Started(MediaHandle),

    /// A new frame is ready for display.
    FrameReady {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        pts_secs: f64,
    },

    Buffering,

    EndOfStream,

    /// Recoverable decoder error; playback may continue.
    Error(String),

    /// The source could not be opened or the decoder died.
    Unavailable(VideoError),
}

/// Identity of a playback subscription. Switching to a different source
/// restarts the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackSession {
    pub source: MediaSource,
}

enum State {
    Idle,
    Decoding {
        decoder: AsyncDecoder,
        /// Handed to the UI on `Ready`.
        pending_handle: Option<MediaHandle>,
    },
}

/// Creates the playback subscription for `session`.
pub fn media_playback(session: PlaybackSession) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(session, playback_stream)
}

fn playback_stream(session: &PlaybackSession) -> impl Stream<Item = PlaybackMessage> {
    let source = session.source.clone();

    stream::channel(100, move |mut output| async move {
        let mut state = State::Idle;

        loop {
            match &mut state {
                State::Idle => match AsyncDecoder::new(&source) {
                    Ok(decoder) => {
                        let pending_handle = Some(MediaHandle {
                            commands: decoder.commands(),
                        });
                        state = State::Decoding {
                            decoder,
                            pending_handle,
                        };
                    }
                    Err(e) => {
                        let error = match e {
                            Error::Video(video) => video,
                            other => VideoError::from_message(&other.to_string()),
                        };
                        let _ = output.send(PlaybackMessage::Unavailable(error)).await;
                        break;
                    }
                },

                State::Decoding {
                    decoder,
                    pending_handle,
                } => {
                    let Some(event) = decoder.recv_event().await else {
                        break;
                    };

                    let message = match event {
                        DecoderEvent::Ready { width, height } => {
                            log::info!("media source open ({}x{})", width, height);
                            match pending_handle.take() {
                                Some(handle) => PlaybackMessage::Started(handle),
                                None => continue,
                            }
                        }
                        DecoderEvent::FrameReady(frame) => PlaybackMessage::FrameReady {
                            rgba_data: frame.rgba_data,
                            width: frame.width,
                            height: frame.height,
                            pts_secs: frame.pts_secs,
                        },
                        DecoderEvent::Buffering => PlaybackMessage::Buffering,
                        DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
                        DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
                        DecoderEvent::Failed(error) => PlaybackMessage::Unavailable(error),
                    };

                    if output.send(message).await.is_err() {
                        break;
                    }
                }
            }
        }

        // Keep subscription alive but idle so it is not restarted
        std::future::pending::<()>().await;
    })
}
