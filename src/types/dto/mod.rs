// API request/response models
pub mod clubs;
pub mod common;
pub mod tags;
pub mod users;
