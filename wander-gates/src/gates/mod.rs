//! The four hard gates, in evaluation order.

pub mod brand;
pub mod photo;
pub mod price;
pub mod quality;

pub use brand::BrandGate;
pub use photo::PhotoGate;
pub use price::PriceGate;
pub use quality::QualityGate;
