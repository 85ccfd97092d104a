pub mod presenter;
pub mod renderers;
pub mod view_models;
pub mod views;
