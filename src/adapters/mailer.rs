use crate::core::{EmailService, Message};
use crate::utils::error::{GreeterError, Result};
use std::io::Write;

/// Stand-in for an SMTP client: records where the message would have gone.
#[derive(Debug, Clone)]
pub struct LoggingMailer {
    smtp_host: String,
    smtp_port: u16,
}

impl LoggingMailer {
    pub fn new(smtp_host: impl Into<String>, smtp_port: u16) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            smtp_port,
        }
    }

    pub fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    pub fn smtp_port(&self) -> u16 {
        self.smtp_port
    }

    /// Writes the dispatch record to `out`; a write failure is a failed dispatch.
    pub fn dispatch<W: Write>(&self, message: &Message, mut out: W) -> Result<()> {
        let payload = serde_json::to_string(message)?;

        tracing::info!(
            smtp_host = %self.smtp_host,
            smtp_port = self.smtp_port,
            recipient = %message.recipient,
            payload = %payload,
            "Dispatching greeting"
        );

        writeln!(out, "{} {} {}", self.smtp_host, self.smtp_port, payload).map_err(|e| {
            GreeterError::DispatchError {
                recipient: message.recipient.clone(),
                message: e.to_string(),
            }
        })
    }
}

impl EmailService for LoggingMailer {
    fn send_message(&self, message: &Message) -> Result<()> {
        self.dispatch(message, std::io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> Message {
        Message {
            from: "sender@here.com".to_string(),
            subject: "Happy Birthday!".to_string(),
            body: "Happy Birthday, dear John!".to_string(),
            recipient: "john.doe@foobar.com".to_string(),
        }
    }

    #[test]
    fn test_dispatch_writes_record_line() {
        let mailer = LoggingMailer::new("localhost", 80);
        let mut out = Vec::new();

        mailer.dispatch(&message(), &mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        let line = written.strip_suffix('\n').unwrap();
        assert!(line.starts_with("localhost 80 {"));
        let json: serde_json::Value = serde_json::from_str(&line["localhost 80 ".len()..]).unwrap();
        assert_eq!(json["from"], "sender@here.com");
        assert_eq!(json["subject"], "Happy Birthday!");
        assert_eq!(json["body"], "Happy Birthday, dear John!");
        assert_eq!(json["recipient"], "john.doe@foobar.com");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_output_is_dispatch_error() {
        let mailer = LoggingMailer::new("localhost", 80);

        match mailer.dispatch(&message(), ClosedPipe) {
            Err(GreeterError::DispatchError { recipient, message }) => {
                assert_eq!(recipient, "john.doe@foobar.com");
                assert!(message.contains("pipe closed"));
            }
            other => panic!("expected DispatchError, got {:?}", other),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_event_carries_message_json() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        let mailer = LoggingMailer::new("localhost", 80);

        tracing::subscriber::with_default(subscriber, || {
            mailer.dispatch(&message(), Vec::new()).unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let event: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        let fields = &event["fields"];
        assert_eq!(fields["smtp_host"], "localhost");
        assert_eq!(fields["smtp_port"], 80);
        let payload: Message =
            serde_json::from_str(fields["payload"].as_str().unwrap()).unwrap();
        assert_eq!(payload, message());
    }

    #[test]
    fn test_send_message_succeeds() {
        let mailer = LoggingMailer::new("mail.example.com", 2525);
        assert!(mailer.send_message(&message()).is_ok());
        assert_eq!(mailer.smtp_host(), "mail.example.com");
        assert_eq!(mailer.smtp_port(), 2525);
    }
}
