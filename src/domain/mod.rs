// Domain layer: models, salary estimation and the provider port.

pub mod model;
pub mod ports;
pub mod salary;
