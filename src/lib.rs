pub mod constants;
pub mod chemistry;
pub mod math_utils;
pub mod temperature;
pub mod cell;
pub mod analysis;
pub mod error;
pub mod report;
pub mod display;
