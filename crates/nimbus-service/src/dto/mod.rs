//! Data transfer objects: the response shape and the cached record.

mod weather_dto;

pub use weather_dto::*;
