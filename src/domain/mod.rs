// Domain layer: entities, request payloads and ports. No HTTP types in here.

pub mod dates;
pub mod model;
pub mod ports;
