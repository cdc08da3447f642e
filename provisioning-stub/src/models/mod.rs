pub mod config_template;
pub mod server;

pub use config_template::ConfigTemplate;
pub use server::{Server, ServerStatus};
