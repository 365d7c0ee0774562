//! The controlled character: stats, equipment, and the damage estimate.

pub mod attributes;
pub mod character;
pub mod equipment;
