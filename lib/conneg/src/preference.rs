use crate::media_range::{parse_accept_header, MediaRangePreference};
use crate::representation::{classify_media_range, RepresentationClass};

/// Media ranges that share the same quality, in the order they appeared in the header.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityBucket {
    quality: f32,
    preferences: Vec<MediaRangePreference>,
}

impl QualityBucket {
    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn preferences(&self) -> &[MediaRangePreference] {
        &self.preferences
    }
}

/// The ranked preferences of a single request.
///
/// Buckets are non-empty and sorted strictly descending by quality. Within a bucket the media
/// ranges keep their header order, so on equal quality the earlier media range wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceTable {
    buckets: Vec<QualityBucket>,
}

impl PreferenceTable {
    /// Parses and ranks an `Accept` header.
    pub fn parse(accept: Option<&str>) -> Self {
        Self::from_preferences(parse_accept_header(accept))
    }

    /// Ranks already parsed preferences.
    pub fn from_preferences(mut preferences: Vec<MediaRangePreference>) -> Self {
        // `sort_by` is stable, which preserves the header order among equal qualities.
        preferences.sort_by(|lhs, rhs| rhs.quality().total_cmp(&lhs.quality()));

        let mut buckets: Vec<QualityBucket> = Vec::new();
        for preference in preferences {
            match buckets.last_mut() {
                Some(bucket) if bucket.quality == preference.quality() => {
                    bucket.preferences.push(preference);
                }
                _ => buckets.push(QualityBucket {
                    quality: preference.quality(),
                    preferences: vec![preference],
                }),
            }
        }

        Self { buckets }
    }

    pub fn buckets(&self) -> &[QualityBucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over all media ranges from the most to the least preferred one.
    pub fn iter(&self) -> impl Iterator<Item = &MediaRangePreference> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.preferences.iter())
    }

    /// Returns the class of the most preferred media range that is supported, or `None` if the
    /// client accepts nothing this front end can deliver.
    pub fn preferred_class(&self) -> Option<RepresentationClass> {
        self.iter()
            .find_map(|preference| classify_media_range(preference.media_range()))
    }
}
