// Domain layer: plain data types and ports. No behaviour beyond std, serde, chrono and rust_decimal.

pub mod model;
pub mod ports;
