// Domain layer: request/response models and the ports the accessor is reached through.

pub mod model;
pub mod ports;
