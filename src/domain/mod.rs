// Domain layer: records and ports. Nothing here touches the filesystem or a transport.

pub mod model;
pub mod ports;
