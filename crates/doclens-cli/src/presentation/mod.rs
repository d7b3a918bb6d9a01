pub mod formatters;
pub mod presenters;
pub mod renderer;
pub mod view_models;
