pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{get_app_service, LocalAppService, LocalStorage, LoggingMailer};
pub use crate::config::{CliConfig, TomlConfig};
pub use crate::core::greeter::{send_greetings, BirthdayGreeter};
pub use crate::core::greetings::{get_greetings, to_email};
pub use crate::core::parser::{parse, parse_with_policy};
pub use crate::domain::model::{Employee, Message, RowPolicy};
pub use crate::domain::ports::{AppService, ConfigProvider, EmailService, FileSystemService};
pub use crate::utils::error::{GreeterError, Result};
