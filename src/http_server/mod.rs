pub mod app;
mod assets;
pub mod error;
mod pages;
pub mod state;
mod views;
