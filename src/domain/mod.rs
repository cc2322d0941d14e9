// Domain layer: feed models, the depth classifier, marker adapter and legend.
// No I/O here; adapters and pipelines live outside.

pub mod adapter;
pub mod basemap;
pub mod classifier;
pub mod legend;
pub mod model;
pub mod ports;
