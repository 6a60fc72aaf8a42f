mod config;
mod server;
mod store;

pub use config::Config;
pub use server::ServerConfig;
pub use store::StoreConfig;
