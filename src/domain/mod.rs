// Domain layer - Core data models
pub mod service;
pub mod stats;
