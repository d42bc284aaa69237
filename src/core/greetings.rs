use crate::domain::model::{Employee, Message};
use chrono::NaiveDate;

pub const SENDER: &str = "sender@here.com";
pub const SUBJECT: &str = "Happy Birthday!";

pub fn to_email(employee: &Employee) -> Message {
    Message {
        from: SENDER.to_string(),
        subject: SUBJECT.to_string(),
        body: format!("Happy Birthday, dear {}!", employee.first_name),
        recipient: employee.email.clone(),
    }
}

/// Greetings for everyone whose birthday falls on `today`, in input order.
pub fn get_greetings(today: NaiveDate, employees: &[Employee]) -> Vec<Message> {
    employees
        .iter()
        .filter(|e| e.is_birthday(today))
        .map(to_email)
        .collect()
}
