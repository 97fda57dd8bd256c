//! Video id extraction from the common URL shapes.

use crate::error::{Result, TutorError};
use url::Url;

const ID_LEN: usize = 11;

/// Extract a video id from a watch / short-link / shorts / embed / `v`
/// URL, or accept a bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(id) = id_from_url(input) {
        return Some(id);
    }

    if input.chars().count() == ID_LEN && input.chars().all(is_id_char) {
        return Some(input.to_string());
    }

    None
}

/// Like [`extract_video_id`], but unparseable input is an
/// [`TutorError::InvalidInput`].
pub fn resolve_video_id(input: &str) -> Result<String> {
    extract_video_id(input).ok_or_else(|| {
        TutorError::InvalidInput(format!("Invalid YouTube URL or video id: {}", input.trim()))
    })
}

fn id_from_url(input: &str) -> Option<String> {
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };
    let url = Url::parse(&candidate).ok()?;
    let host = url.host_str()?;
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host);

    match host {
        "youtube.com" | "music.youtube.com" | "youtube-nocookie.com" => {
            if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
                return clip_id(&v);
            }
            let mut segments = url.path_segments()?;
            match (segments.next(), segments.next()) {
                (Some("shorts" | "embed" | "v" | "live"), Some(id)) => clip_id(id),
                _ => None,
            }
        }
        "youtu.be" => url.path_segments()?.next().and_then(clip_id),
        _ => None,
    }
}

fn clip_id(raw: &str) -> Option<String> {
    let id: String = raw.chars().take(ID_LEN).collect();
    if id.is_empty() || !id.chars().all(is_id_char) {
        None
    } else {
        Some(id)
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shapes() {
        let expected = Some("dQw4w9WgXcQ".to_string());
        for input in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://youtu.be/dQw4w9WgXcQ?si=abc",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "  dQw4w9WgXcQ  ",
        ] {
            assert_eq!(extract_video_id(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_rejects_other_input() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        assert_eq!(extract_video_id("not a video"), None);
        assert_eq!(extract_video_id("short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/feed/trending"), None);
    }

    #[test]
    fn test_resolve_reports_input() {
        assert_eq!(
            resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        let err = resolve_video_id(" not a video ").unwrap_err();
        assert!(matches!(err, TutorError::InvalidInput(_)));
        assert!(err.to_string().ends_with("video id: not a video"));
    }
}
