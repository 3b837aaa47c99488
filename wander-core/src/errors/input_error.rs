//! Structurally invalid input records.

/// A raw hotel record that cannot enter the pipeline.
///
/// Missing optional data (photos, ratings, offers) is never an `InputError`;
/// it degrades to defaults inside the pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("record {index} has no hotel id")]
    MissingHotelId { index: usize },

    #[error("record {index}: content id {content_id} does not match hotel id {hotel_id}")]
    ContentMismatch {
        index: usize,
        hotel_id: String,
        content_id: String,
    },

    #[error("record {index} ({hotel_id}): coordinates ({latitude}, {longitude}) are out of range")]
    InvalidCoordinates {
        index: usize,
        hotel_id: String,
        latitude: f64,
        longitude: f64,
    },
}

impl InputError {
    /// Position of the offending record in the submitted batch.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingHotelId { index }
            | Self::ContentMismatch { index, .. }
            | Self::InvalidCoordinates { index, .. } => *index,
        }
    }
}
