// Adapters layer: the only code that touches the filesystem or a transport.

pub mod mailer;
pub mod storage;

pub use mailer::LoggingMailer;
pub use storage::LocalStorage;

use crate::core::{EmailService, FileSystemService, Message};
use crate::utils::error::Result;

/// Composition root: local file reads plus the logging mailer.
#[derive(Debug, Clone)]
pub struct LocalAppService {
    storage: LocalStorage,
    mailer: LoggingMailer,
}

impl LocalAppService {
    pub fn new(storage: LocalStorage, mailer: LoggingMailer) -> Self {
        Self { storage, mailer }
    }
}

pub fn get_app_service(smtp_host: impl Into<String>, smtp_port: u16) -> LocalAppService {
    LocalAppService::new(LocalStorage::default(), LoggingMailer::new(smtp_host, smtp_port))
}

impl FileSystemService for LocalAppService {
    fn read(&self, file_name: &str) -> Result<String> {
        self.storage.read(file_name)
    }
}

impl EmailService for LocalAppService {
    fn send_message(&self, message: &Message) -> Result<()> {
        self.mailer.send_message(message)
    }
}
