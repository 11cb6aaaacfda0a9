// Domain layer: value types and the currency port. Nothing here knows about words or I/O.

pub mod model;
pub mod ports;
