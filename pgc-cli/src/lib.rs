pub mod app;
pub mod benchmarks;
pub mod format;
pub mod state;
