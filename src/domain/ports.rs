use crate::domain::model::{Message, RowPolicy};
use crate::utils::error::Result;

/// Reads a named resource as UTF-8 text.
pub trait FileSystemService {
    fn read(&self, file_name: &str) -> Result<String>;
}

/// Hands one message to an outbound transport.
pub trait EmailService {
    fn send_message(&self, message: &Message) -> Result<()>;
}

/// Everything the greeter needs from the outside world.
pub trait AppService: FileSystemService + EmailService {}

impl<T: FileSystemService + EmailService> AppService for T {}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn smtp_host(&self) -> &str;
    fn smtp_port(&self) -> u16;
    fn row_policy(&self) -> RowPolicy;
}

impl<T: FileSystemService + ?Sized> FileSystemService for &T {
    fn read(&self, file_name: &str) -> Result<String> {
        (**self).read(file_name)
    }
}

impl<T: EmailService + ?Sized> EmailService for &T {
    fn send_message(&self, message: &Message) -> Result<()> {
        (**self).send_message(message)
    }
}
