//! Service layer for chart computation.
//!
//! Services tie the time normalizer, the ephemeris adapter and the sign
//! mapper together. They are synchronous and hold no state; the HTTP layer
//! runs them on the blocking thread pool.

pub mod natal_chart;

pub use natal_chart::{assemble_chart, calculate_natal_chart};
