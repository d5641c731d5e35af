pub mod config;
pub mod constant;
pub mod lazy;
pub mod model;
