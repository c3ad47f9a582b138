// Domain layer: result models and the task port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
