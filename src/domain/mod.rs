// Domain layer: value objects, sample catalogs and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod sample;
