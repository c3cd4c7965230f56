pub mod activity;
pub mod app;
