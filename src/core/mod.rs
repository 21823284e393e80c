pub mod backup;
pub mod heatmap;
pub mod stats;
