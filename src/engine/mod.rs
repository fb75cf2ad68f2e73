//! Outbound calls to the Engine transaction service

pub mod client;

pub use client::{EngineCallOptions, EngineClient};
