pub mod app;
pub mod engine;
pub mod input;
pub mod report;
pub mod ui;
