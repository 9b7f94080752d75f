// Domain layer: taxonomy, prompt and ports (interfaces). No HTTP or storage code lives here.

pub mod model;
pub mod ports;
pub mod prompt;
