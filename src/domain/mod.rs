/// Domain layer: entities and HTTP payload types
pub mod models;
pub mod requests;
