pub mod greeter;
pub mod greetings;
pub mod parser;

pub use crate::domain::model::{Employee, Message, RowPolicy};
pub use crate::domain::ports::{AppService, ConfigProvider, EmailService, FileSystemService};
pub use crate::utils::error::Result;
