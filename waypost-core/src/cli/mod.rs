pub mod conf;
pub mod reload;
pub mod settings;
