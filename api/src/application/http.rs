pub mod food_analysis;
pub mod health;
pub mod mood_impact;
pub mod nutrition;
pub mod profile;
pub mod report;
pub mod server;
