pub mod electron;
pub mod settings;
