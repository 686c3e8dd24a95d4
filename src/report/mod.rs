//! Presentational output. Nothing here computes; it only renders values the
//! training core produced.

pub mod architecture;
pub mod plot;
