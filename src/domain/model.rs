use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub last_name: String,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
}

impl Employee {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        email: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            date_of_birth,
            email: email.into(),
        }
    }

    /// Month and day must match; the year is ignored.
    pub fn is_birthday(&self, today: NaiveDate) -> bool {
        self.date_of_birth.month() == today.month() && self.date_of_birth.day() == today.day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub subject: String,
    pub body: String,
    pub recipient: String,
}

/// What the parser does with a row that does not yield an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    #[default]
    Fail,
    Skip,
}
