//! Data model: raw provider records in, curated cards and run statistics out.

pub mod card;
pub mod gate;
pub mod hotel;
pub mod score;
pub mod signals;
pub mod stats;

pub use card::CuratedCard;
pub use gate::GateId;
pub use hotel::{
    Description, HotelContent, HotelIdentity, HotelOffer, MediaCategory, MediaItem, Price,
    RawHotel, ThirdPartyRating,
};
pub use score::ScoreComponents;
pub use signals::{BrandInfo, HotelSignals, Tag, TagCategory, TagList};
pub use stats::{CurationStats, DiversityStats, Rejection, RejectionReason};
