//! Structural validation of input records.
//!
//! Only records the pipeline cannot reason about at all are rejected here.
//! Missing photos, ratings or offers are business outcomes handled downstream.

use wander_core::errors::InputError;
use wander_core::models::RawHotel;

/// Check one record.
pub fn validate_record(index: usize, hotel: &RawHotel) -> Result<(), InputError> {
    let id = hotel.hotel.hotel_id.trim();
    if id.is_empty() {
        return Err(InputError::MissingHotelId { index });
    }

    let content_id = hotel.content.hotel_id.trim();
    if !content_id.is_empty() && content_id != id {
        return Err(InputError::ContentMismatch {
            index,
            hotel_id: id.to_string(),
            content_id: content_id.to_string(),
        });
    }

    let (lat, lon) = (hotel.hotel.latitude, hotel.hotel.longitude);
    if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(InputError::InvalidCoordinates {
            index,
            hotel_id: id.to_string(),
            latitude: lat,
            longitude: lon,
        });
    }
    Ok(())
}

/// Every structural problem in a batch, in input order.
pub fn validate_batch(hotels: &[RawHotel]) -> Vec<InputError> {
    hotels
        .iter()
        .enumerate()
        .filter_map(|(i, h)| validate_record(i, h).err())
        .collect()
}
