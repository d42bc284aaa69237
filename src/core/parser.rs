use crate::domain::model::{Employee, RowPolicy};
use crate::utils::error::{GreeterError, Result};
use chrono::{DateTime, NaiveDate};

pub const FIELD_SEPARATOR: &str = ", ";
const FIELD_COUNT: usize = 4;

const YEAR_FIRST_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const YEAR_LAST_FORMATS: &[&str] = &["%m/%d/%Y", "%d %B %Y", "%B %d %Y"];
const SHORT_YEAR_FORMATS: &[&str] = &["%m/%d/%y"];

pub fn parse(input: &str) -> Result<Vec<Employee>> {
    parse_with_policy(input, RowPolicy::Fail)
}

/// Parses the employee file: a header line, then `last, first, date, email` per line.
/// Blank lines are ignored. Line numbers in errors are 1-based and count the header.
pub fn parse_with_policy(input: &str, policy: RowPolicy) -> Result<Vec<Employee>> {
    let mut employees = Vec::new();

    for (index, raw_line) in input.split('\n').enumerate().skip(1) {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(index + 1, line) {
            Ok(employee) => employees.push(employee),
            Err(e) if policy == RowPolicy::Skip => {
                tracing::warn!("Skipping row: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!("Parsed {} employees", employees.len());
    Ok(employees)
}

fn parse_line(line_number: usize, line: &str) -> Result<Employee> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(GreeterError::MalformedRow {
            line: line_number,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let date_of_birth = parse_date(fields[2]).ok_or_else(|| GreeterError::MalformedRow {
        line: line_number,
        reason: format!("unrecognised date '{}'", fields[2].trim()),
    })?;

    Ok(Employee::new(fields[0], fields[1], date_of_birth, fields[3]))
}

/// Lenient date parsing over the common written forms, plus RFC 3339 timestamps.
/// The position and width of the year pick the formats tried, since chrono's `%Y`
/// also accepts one or two digits.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    let leading = value.chars().take_while(char::is_ascii_digit).count();
    let trailing = value.chars().rev().take_while(char::is_ascii_digit).count();
    let formats: &[&str] = if leading == 4 {
        YEAR_FIRST_FORMATS
    } else if trailing == 4 {
        YEAR_LAST_FORMATS
    } else if trailing == 2 {
        SHORT_YEAR_FORMATS
    } else {
        &[]
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
