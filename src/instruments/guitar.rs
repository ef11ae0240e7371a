//! The parts every guitar has in common.
//!
//! [`Guitar`] is a component, not an instrument: it knows its brand and
//! strings but cannot tune, so it can never be handed to a band on its own.
//! Concrete guitars embed one and implement [`Instrument`](super::Instrument)
//! themselves.

/// Gauge used when a guitar is built without naming one.
pub const DEFAULT_STRING_GAUGE: &str = "medium";

/// Brand and string gauge shared by all guitars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guitar {
    brand: String,
    string_gauge: String,
}

impl Guitar {
    pub fn new(brand: impl Into<String>) -> Self {
        Self::with_string_gauge(brand, DEFAULT_STRING_GAUGE)
    }

    pub fn with_string_gauge(brand: impl Into<String>, string_gauge: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            string_gauge: string_gauge.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn string_gauge(&self) -> &str {
        &self.string_gauge
    }
}

/// Instruments strung like a guitar.
pub trait Stringed {
    fn string_gauge(&self) -> &str;
}
