// Domain layer: face/weather models and the ports to the device and the network.

pub mod model;
pub mod ports;
