// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! The source is opened and decoded on a blocking thread. Frames and state
//! changes come back through a bounded channel; commands go in through an
//! unbounded one so the UI never blocks on the decoder.

use super::transport::{Transition, Transport};
use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::{Arc, Once};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process, including network protocols.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }
        ffmpeg_next::format::network::init();
        ffmpeg_next::util::log::set_level(ffmpeg_next::util::log::Level::Error);
    });

    init_result
}

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

impl DecodedFrame {
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq)]
pub enum DecoderCommand {
    /// Resume playback from the current position.
    Play,

    /// Stop delivering frames, keeping the position.
    Pause,

    /// Reposition to a timestamp. Playback state is unchanged.
    Seek { target_secs: f64 },

    /// Stop decoding and release the source.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// The source is open and accepts commands.
    Ready { width: u32, height: u32 },

    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// Decoder is repositioning or waiting for data.
    Buffering,

    /// Playback reached the end of the media.
    EndOfStream,

    /// A recoverable error occurred; the decoder keeps running.
    Error(String),

    /// The decoder stopped because of an error. No further events follow.
    Failed(VideoError),
}

/// Where the clip comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaSource {
    /// Network address understood by FFmpeg (`https://…`, `rtsp://…`).
    Url(String),
    /// Local file.
    File(String),
}

impl MediaSource {
    /// Classifies a configured source string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains("://") {
            MediaSource::Url(raw.to_string())
        } else {
            MediaSource::File(raw.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            MediaSource::Url(url) => url,
            MediaSource::File(path) => path,
        }
    }
}

/// Async video decoder that runs in a blocking thread.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Bounded to prevent memory accumulation during rapid seeks.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns the decoder thread for `source`.
    ///
    /// Local files are checked up front. Network sources are only opened by
    /// the decoder thread, which reports failure through
    /// [`DecoderEvent::Failed`].
    pub fn new(source: &MediaSource) -> Result<Self> {
        if let MediaSource::File(path) = source {
            if !Path::new(path).exists() {
                return Err(Error::Video(VideoError::IoError(format!(
                    "Video file not found: {path}"
                ))));
            }
        }

        // Capacity of 2 frames gives backpressure with a little buffering
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        let source = source.as_str().to_string();
        // FFmpeg contexts are not Send
        tokio::task::spawn_blocking(move || {
            let failure_tx = event_tx.clone();
            if let Err(e) = Self::decoder_loop_blocking(&source, command_rx, event_tx) {
                log::warn!("decoder for {} stopped: {}", source, e);
                let error = match e {
                    Error::Video(video) => video,
                    other => VideoError::from_message(&other.to_string()),
                };
                let _ = failure_tx.blocking_send(DecoderEvent::Failed(error));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Sender half of the command channel.
    pub fn commands(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Video(VideoError::Other("Decoder task is not running".into())))
    }

    /// Receives the next event. Returns `None` once the decoder thread ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        source: &str,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(&source)?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(Error::Video(VideoError::NoVideoStream))?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())?;
        let mut decoder = context_decoder.decoder().video().map_err(|e| {
            Error::Video(VideoError::from_message(&format!(
                "Failed to create video decoder: {e}"
            )))
        })?;

        let width = decoder.width();
        let height = decoder.height();

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| {
            Error::Video(VideoError::DecodingFailed(format!(
                "Failed to create scaler: {e}"
            )))
        })?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        if event_tx
            .blocking_send(DecoderEvent::Ready { width, height })
            .is_err()
        {
            return Ok(());
        }

        let mut transport = Transport::default();
        let mut pacing = Pacing::default();
        // Show the first frame as a poster before playback starts
        let mut decode_single_frame = true;

        loop {
            if event_tx.is_closed() {
                break;
            }

            match command_rx.try_recv() {
                Ok(command) => match transport.apply(&command) {
                    Transition::None => {}
                    Transition::Resume { seek_to } => {
                        if let Some(target_secs) = seek_to {
                            match seek(&mut ictx, target_secs) {
                                Ok(()) => decoder.flush(),
                                Err(e) => {
                                    let _ = event_tx.blocking_send(DecoderEvent::Error(format!(
                                        "Resume seek failed: {e}"
                                    )));
                                }
                            }
                        }
                        pacing.restart();
                        let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                    }
                    Transition::Halt => pacing.clear(),
                    Transition::Seek {
                        target_secs,
                        preview,
                    } => match seek(&mut ictx, target_secs) {
                        Ok(()) => {
                            decoder.flush();
                            pacing.restart();
                            decode_single_frame = preview;
                            let _ = event_tx.blocking_send(DecoderEvent::Buffering);
                        }
                        Err(e) => {
                            let _ = event_tx
                                .blocking_send(DecoderEvent::Error(format!("Seek failed: {e}")));
                        }
                    },
                    Transition::Shutdown => break,
                },
                Err(mpsc::error::TryRecvError::Disconnected) => break,
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !transport.is_playing() && !decode_single_frame {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Packet send failed: {e}")));
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_err() {
                    continue;
                }

                let mut rgba_frame = ffmpeg_next::frame::Video::empty();
                if let Err(e) = scaler.run(&decoded_frame, &mut rgba_frame) {
                    let _ = event_tx
                        .blocking_send(DecoderEvent::Error(format!("Scaling failed: {e}")));
                    continue;
                }

                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_f64);

                if transport.is_playing() {
                    pacing.wait_for(pts_secs);
                }
                transport.on_frame(pts_secs);

                let frame = DecodedFrame {
                    rgba_data: Arc::new(extract_rgba_data(&rgba_frame)),
                    width,
                    height,
                    pts_secs,
                };
                if event_tx
                    .blocking_send(DecoderEvent::FrameReady(frame))
                    .is_err()
                {
                    return Ok(());
                }

                frame_decoded = true;
                decode_single_frame = false;
                break;
            }

            if !frame_decoded {
                transport.on_end();
                pacing.clear();
                decode_single_frame = false;
                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
            }
        }

        Ok(())
    }
}

/// Seeks to `target_secs`, landing on the keyframe before it.
fn seek(ictx: &mut ffmpeg_next::format::context::Input, target_secs: f64) -> Result<()> {
    // AV_TIME_BASE is microseconds
    let timestamp = (target_secs * 1_000_000.0) as i64;
    ictx.seek(timestamp, ..timestamp)?;
    Ok(())
}

/// Wall-clock pacing of frames relative to the first frame after a restart.
#[derive(Debug, Default)]
struct Pacing {
    started_at: Option<Instant>,
    first_pts: Option<f64>,
}

impl Pacing {
    fn restart(&mut self) {
        self.started_at = Some(Instant::now());
        self.first_pts = None;
    }

    fn clear(&mut self) {
        self.started_at = None;
        self.first_pts = None;
    }

    /// Sleeps until the frame at `pts_secs` is due.
    fn wait_for(&mut self, pts_secs: f64) {
        let started_at = *self.started_at.get_or_insert_with(Instant::now);
        let first = *self.first_pts.get_or_insert(pts_secs);
        let delay = (pts_secs - first).max(0.0);
        let due = started_at + Duration::from_secs_f64(delay);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }
}

/// Extracts RGBA data from a decoded frame, dropping row padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
    }
    rgba_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_source_classifies_urls_and_paths() {
        assert_eq!(
            MediaSource::parse("https://example.com/clip.mp4"),
            MediaSource::Url("https://example.com/clip.mp4".to_string())
        );
        assert_eq!(
            MediaSource::parse(" /tmp/clip.mp4 "),
            MediaSource::File("/tmp/clip.mp4".to_string())
        );
    }

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let result = AsyncDecoder::new(&MediaSource::File("/nonexistent/video.mp4".into()));
        assert!(matches!(
            result,
            Err(Error::Video(VideoError::IoError(_)))
        ));
    }

    #[tokio::test]
    async fn decoder_reports_failure_for_invalid_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let source = MediaSource::File(video_path.to_string_lossy().to_string());
        let mut decoder = AsyncDecoder::new(&source).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("decoder should answer");
        assert!(matches!(event, Some(DecoderEvent::Failed(_))));
    }

    #[test]
    fn pacing_does_not_wait_for_first_frame() {
        let mut pacing = Pacing::default();
        pacing.restart();
        let before = Instant::now();
        pacing.wait_for(12.0);
        assert!(before.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn decoded_frame_calculates_size() {
        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0u8; 64 * 48 * 4]),
            width: 64,
            height: 48,
            pts_secs: 0.0,
        };
        assert_eq!(frame.size_bytes(), 64 * 48 * 4);
    }
}
