// Domain layer: command and request models plus the ports the core talks through.

pub mod model;
pub mod ports;
