// Domain layer: planet/vehicle models and the ports the core talks through.

pub mod model;
pub mod ports;
