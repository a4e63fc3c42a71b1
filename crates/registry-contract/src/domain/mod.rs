//! Domain layer: entities, value objects, pure services and invariants.

pub mod entities;
pub mod invariants;
pub mod services;
pub mod value_objects;
