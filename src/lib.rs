pub mod config;
pub mod error;
pub mod handler;
pub mod json;
pub mod message;
pub mod publisher;

pub use config::{create_aws_config, Config};
pub use error::{ConfigError, PublishError};
pub use handler::{NotificationHandler, Response};
pub use message::NotificationMessage;
pub use publisher::{PublishReceipt, PublishRequest, Publisher, SnsPublisher};
