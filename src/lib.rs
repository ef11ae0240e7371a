pub mod amp; // Shared power/volume for the electric family
pub mod band; // Ordered performances across instruments
pub mod error;
pub mod instruments; // Piano and the guitar family
pub mod music;
pub mod stage; // Where performance lines go

pub use error::{PerformError, Result};

pub const MIN_VOLUME: i32 = 0;
pub const MAX_VOLUME: i32 = 10;
/// Volume an electric guitar dials in while tuning.
pub const TUNING_VOLUME: i32 = 5;
