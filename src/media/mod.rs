use std::path::Path;

/// Largest file the input screen accepts
pub const MAX_FILE_SIZE_MB: u64 = 50;
pub const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

/// Audio and video formats the app accepts for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Mp3,
    M4a,
    Wav,
    Flac,
    Ogg,
    Webm,
    Mp4,
    Mov,
    Avi,
    Mkv,
}

impl MediaFormat {
    /// Determine the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(MediaFormat::Mp3),
            "m4a" | "aac" => Some(MediaFormat::M4a),
            "wav" => Some(MediaFormat::Wav),
            "flac" => Some(MediaFormat::Flac),
            "ogg" => Some(MediaFormat::Ogg),
            "webm" => Some(MediaFormat::Webm),
            "mp4" | "m4v" => Some(MediaFormat::Mp4),
            "mov" => Some(MediaFormat::Mov),
            "avi" => Some(MediaFormat::Avi),
            "mkv" => Some(MediaFormat::Mkv),
            _ => None,
        }
    }

    /// Determine the format from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// MIME type sent with the media payload
    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaFormat::Mp3 => "audio/mpeg",
            MediaFormat::M4a => "audio/mp4",
            MediaFormat::Wav => "audio/wav",
            MediaFormat::Flac => "audio/flac",
            MediaFormat::Ogg => "audio/ogg",
            MediaFormat::Webm => "video/webm",
            MediaFormat::Mp4 => "video/mp4",
            MediaFormat::Mov => "video/quicktime",
            MediaFormat::Avi => "video/x-msvideo",
            MediaFormat::Mkv => "video/x-matroska",
        }
    }

    /// Whether this is a video container rather than pure audio
    pub fn is_video(&self) -> bool {
        matches!(
            self,
            MediaFormat::Webm | MediaFormat::Mp4 | MediaFormat::Mov | MediaFormat::Avi | MediaFormat::Mkv
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(MediaFormat::from_extension("mp3"), Some(MediaFormat::Mp3));
        assert_eq!(MediaFormat::from_extension("MP3"), Some(MediaFormat::Mp3));
        assert_eq!(MediaFormat::from_extension("aac"), Some(MediaFormat::M4a));
        assert_eq!(MediaFormat::from_extension("mov"), Some(MediaFormat::Mov));
        assert_eq!(MediaFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        let path = PathBuf::from("/tmp/interview.mp4");
        assert_eq!(MediaFormat::from_path(&path), Some(MediaFormat::Mp4));

        let no_ext = PathBuf::from("/tmp/interview");
        assert_eq!(MediaFormat::from_path(&no_ext), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(MediaFormat::Mp3.mime_type(), "audio/mpeg");
        assert_eq!(MediaFormat::Mp4.mime_type(), "video/mp4");
        assert!(MediaFormat::Mp4.is_video());
        assert!(!MediaFormat::Wav.is_video());
    }

    #[test]
    fn test_max_file_size() {
        assert_eq!(MAX_FILE_SIZE_BYTES, 52_428_800);
    }
}
