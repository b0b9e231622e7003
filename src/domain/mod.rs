// Domain layer: registration records, the dataset and the validated breed selection,
// plus the ports the adapters and config implement.

pub mod model;
pub mod ports;
