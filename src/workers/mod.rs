//! Background workers

pub mod core;
pub mod fetcher;
