pub mod cli;
pub mod conf;
pub mod logging;
pub mod networking;
pub mod proxy;
pub mod server;
pub mod settings;
