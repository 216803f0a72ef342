pub mod chart;
pub mod configs;
pub mod sources;
