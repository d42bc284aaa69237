use crate::core::greetings::get_greetings;
use crate::core::parser::parse_with_policy;
use crate::domain::model::RowPolicy;
use crate::domain::ports::AppService;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Binds the services once; `run` can then be called for any file and date.
pub fn send_greetings<S: AppService>(services: S) -> BirthdayGreeter<S> {
    BirthdayGreeter::new(services)
}

pub struct BirthdayGreeter<S: AppService> {
    services: S,
    row_policy: RowPolicy,
}

impl<S: AppService> BirthdayGreeter<S> {
    pub fn new(services: S) -> Self {
        Self {
            services,
            row_policy: RowPolicy::default(),
        }
    }

    pub fn with_row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }

    /// Stops at the first failed dispatch; later messages are not attempted.
    pub fn run(&self, file_name: &str, today: NaiveDate) -> Result<()> {
        tracing::info!("Sending birthday greetings for {} from {}", today, file_name);

        let input = self.services.read(file_name)?;
        let employees = parse_with_policy(&input, self.row_policy)?;
        tracing::debug!("Loaded {} employees", employees.len());

        let greetings = get_greetings(today, &employees);
        tracing::info!("{} of {} employees have a birthday", greetings.len(), employees.len());

        for message in &greetings {
            self.services.send_message(message)?;
        }

        Ok(())
    }
}
