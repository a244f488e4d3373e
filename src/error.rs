// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Video(VideoError),
}

/// Failures reported by the host media subsystem.
///
/// None of these reach the user as an error screen: the media card simply
/// shows its "unavailable" placeholder and the controls become no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoError {
    /// The source could not be reached (DNS, connection refused, HTTP error).
    SourceUnavailable(String),

    /// Video codec is not supported by the system's FFmpeg
    UnsupportedCodec(String),

    /// The source contains no video stream
    NoVideoStream,

    /// Decoding failed during playback
    DecodingFailed(String),

    /// Local file access failed
    IoError(String),

    /// Generic error with raw message
    Other(String),
}

impl VideoError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            VideoError::SourceUnavailable(_) => "media-error-source-unavailable",
            VideoError::UnsupportedCodec(_) => "media-error-unsupported-codec",
            VideoError::NoVideoStream => "media-error-no-video-stream",
            VideoError::DecodingFailed(_) => "media-error-decoding-failed",
            VideoError::IoError(_) => "media-error-io",
            VideoError::Other(_) => "media-error-general",
        }
    }

    /// Categorizes a raw FFmpeg/decoder message.
    ///
    /// Codec names win over everything else; otherwise the first matching
    /// entry of [`MESSAGE_RULES`] decides.
    pub fn from_message(msg: &str) -> Self {
        let lower = msg.to_lowercase();

        if let Some(codec) = KNOWN_CODECS.iter().find(|codec| lower.contains(*codec)) {
            if lower.contains("codec") || lower.contains("decoder") {
                return VideoError::UnsupportedCodec(codec.to_uppercase());
            }
        }

        let kind = MESSAGE_RULES
            .iter()
            .find(|(_, needles)| needles.iter().any(|needle| lower.contains(needle)))
            .map(|(kind, _)| *kind);

        match kind {
            Some(Kind::Source) => VideoError::SourceUnavailable(msg.to_string()),
            Some(Kind::Io) => VideoError::IoError(msg.to_string()),
            Some(Kind::NoStream) => VideoError::NoVideoStream,
            Some(Kind::Decoding) => VideoError::DecodingFailed(msg.to_string()),
            None => VideoError::Other(msg.to_string()),
        }
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Source,
    Io,
    NoStream,
    Decoding,
}

const KNOWN_CODECS: &[&str] = &["h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2"];

/// Ordered keyword rules. Network failures precede I/O so that an HTTP
/// "404 Not Found" is not read as a missing local file.
const MESSAGE_RULES: &[(Kind, &[&str])] = &[
    (Kind::Decoding, &["codec not found", "decoder not found", "unsupported codec"]),
    (
        Kind::Source,
        &["connection", "timed out", "network", "http", "resolve"],
    ),
    (
        Kind::Io,
        &["no such file", "not found", "permission denied", "i/o error"],
    ),
    (Kind::NoStream, &["no video stream", "no video track"]),
    (
        Kind::Decoding,
        &["packet", "scaling", "seek", "decode", "invalid data"],
    ),
];

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::SourceUnavailable(msg) => write!(f, "Media source unavailable: {}", msg),
            VideoError::UnsupportedCodec(codec) => {
                write!(f, "Unsupported video codec: {}", codec)
            }
            VideoError::NoVideoStream => write!(f, "No video stream found"),
            VideoError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            VideoError::IoError(msg) => write!(f, "I/O error: {}", msg),
            VideoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<VideoError> for Error {
    fn from(err: VideoError) -> Self {
        Error::Video(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ffmpeg_next::Error> for Error {
    fn from(err: ffmpeg_next::Error) -> Self {
        Error::Video(VideoError::from_message(&err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn video_error_from_message_network() {
        let err = VideoError::from_message("Connection refused");
        assert!(matches!(err, VideoError::SourceUnavailable(_)));

        let err = VideoError::from_message("HTTP error 404 Not Found");
        assert!(matches!(err, VideoError::SourceUnavailable(_)));
    }

    #[test]
    fn video_error_from_message_io() {
        let err = VideoError::from_message("No such file or directory");
        assert!(matches!(err, VideoError::IoError(_)));
    }

    #[test]
    fn video_error_from_message_no_stream() {
        let err = VideoError::from_message("No video stream found in source");
        assert_eq!(err, VideoError::NoVideoStream);
    }

    #[test]
    fn video_error_from_message_codec() {
        let err = VideoError::from_message("Decoder h264 not found");
        assert!(matches!(err, VideoError::UnsupportedCodec(codec) if codec == "H264"));
    }

    #[test]
    fn video_error_from_message_decoding() {
        let err = VideoError::from_message("Packet send failed: error");
        assert!(matches!(err, VideoError::DecodingFailed(_)));
    }

    #[test]
    fn unknown_codec_failure_is_a_decoding_error() {
        let err = VideoError::from_message("Decoder not found for stream 0");
        assert!(matches!(err, VideoError::DecodingFailed(_)));
    }

    #[test]
    fn unclassified_message_is_kept_verbatim() {
        let err = VideoError::from_message("something odd");
        assert_eq!(err, VideoError::Other("something odd".into()));
    }

    #[test]
    fn video_error_i18n_keys() {
        assert_eq!(
            VideoError::NoVideoStream.i18n_key(),
            "media-error-no-video-stream"
        );
        assert_eq!(
            VideoError::SourceUnavailable(String::new()).i18n_key(),
            "media-error-source-unavailable"
        );
    }

    #[test]
    fn video_error_converts_into_error() {
        let err: Error = VideoError::NoVideoStream.into();
        assert_eq!(format!("{}", err), "Video Error: No video stream found");
    }
}
