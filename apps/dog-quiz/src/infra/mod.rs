//! Infrastructure: where images come from.

pub mod dog_api;
pub mod image_source;

pub use dog_api::DogApiClient;
pub use image_source::{FetchError, ImageSource};
