// Domain layer: request/response models and the datastore port.

pub mod model;
pub mod ports;
