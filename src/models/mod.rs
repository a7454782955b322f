pub mod album;
pub mod config;
pub mod response;

pub use album::{seed_albums, Album};
pub use config::ServerConfig;
pub use response::{ApiResponse, ResponseData};
