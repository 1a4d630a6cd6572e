mod app;
mod input;
mod render;
mod run;

pub use run::run;
