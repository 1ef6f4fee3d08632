pub mod chart;
pub mod time;
pub mod zodiac;

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;

pub use chart::*;
pub use time::*;
pub use zodiac::*;
