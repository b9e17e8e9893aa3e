// Domain layer: document models and ports (storage, document sources).

pub mod model;
pub mod ports;
