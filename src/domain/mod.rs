//! Domain layer - core value types

pub mod model;
