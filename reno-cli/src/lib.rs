pub mod app;
pub mod batch;
pub mod logging;
pub mod output;
pub mod settings;
