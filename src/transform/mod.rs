//! Pure transforms from fetched Sleeper documents to site artifacts.
//!
//! Nothing in here does I/O. Command handlers fetch, call into these
//! functions, and hand the results to the artifact store.

pub mod history;
pub mod matchups;
pub mod projections;
pub mod rankings;
pub mod standings;
pub mod teams;

/// Round to two decimal places, the precision every points field is published at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
