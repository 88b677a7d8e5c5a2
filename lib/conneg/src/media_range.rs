/// The media range assumed when a request carries no (or an empty) `Accept` header.
pub const DEFAULT_MEDIA_RANGE: &str = "text/html";
/// The quality of a media range without a (valid) `q` parameter.
pub const DEFAULT_QUALITY: f32 = 1.0;

/// A single media range of an `Accept` header together with its quality.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRangePreference {
    media_range: String,
    quality: f32,
}

impl MediaRangePreference {
    /// Creates a new preference. A NaN quality counts as `1.0`. Out of range values are kept, so
    /// `q=7` still ranks above `q=1`.
    pub fn new(media_range: impl Into<String>, quality: f32) -> Self {
        Self {
            media_range: media_range.into(),
            quality: normalize_quality(quality),
        }
    }

    pub fn media_range(&self) -> &str {
        &self.media_range
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }
}

/// Parses the raw value of an `Accept` header into its media ranges, in header order.
///
/// The header is matched case-insensitively, hence all media ranges are lower-cased. A missing
/// or blank header yields a single [`DEFAULT_MEDIA_RANGE`] preference. Malformed `q` values are
/// not rejected but fall back to [`DEFAULT_QUALITY`], and segments without a media range are
/// skipped.
pub fn parse_accept_header(header: Option<&str>) -> Vec<MediaRangePreference> {
    let header = match header {
        Some(header) if !header.trim().is_empty() => header.to_lowercase(),
        _ => {
            return vec![MediaRangePreference::new(
                DEFAULT_MEDIA_RANGE,
                DEFAULT_QUALITY,
            )]
        }
    };

    header.split(',').filter_map(parse_media_range).collect()
}

fn parse_media_range(segment: &str) -> Option<MediaRangePreference> {
    let mut tokens = segment.split(';');
    let media_range = tokens.next()?.trim();
    if media_range.is_empty() {
        return None;
    }

    // The last `q` parameter wins.
    let quality = tokens
        .filter_map(|token| token.trim().strip_prefix("q="))
        .last()
        .map_or(DEFAULT_QUALITY, parse_quality);

    Some(MediaRangePreference::new(media_range, quality))
}

fn parse_quality(value: &str) -> f32 {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|quality| quality.is_finite())
        .unwrap_or(DEFAULT_QUALITY)
}

fn normalize_quality(quality: f32) -> f32 {
    if quality.is_nan() {
        DEFAULT_QUALITY
    } else if quality == 0.0 {
        // Folds -0.0 into 0.0 so that equal qualities compare equal bit-wise.
        0.0
    } else {
        quality
    }
}
