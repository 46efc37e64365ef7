// Domain layer: result records and ports (interfaces). No knowledge of HTTP or
// the concrete model backend lives here.

pub mod model;
pub mod ports;
