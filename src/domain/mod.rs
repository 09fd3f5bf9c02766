// Domain layer: API payload models, summaries and the source port.

pub mod model;
pub mod ports;
