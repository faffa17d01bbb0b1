// Domain layer: core models and ports (interfaces). No external systems here.

pub mod model;
pub mod ports;
