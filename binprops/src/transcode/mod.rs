//! Conversions from property maps to formats that need third-party encoders.

pub mod cbor;
pub mod toml;
pub mod yaml;
