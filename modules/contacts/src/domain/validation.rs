use std::sync::LazyLock;

use regex::Regex;

use crate::domain::model::NewContact;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SERVICES_LEN: usize = 200;
pub const MAX_WORK_RELATED_LEN: usize = 200;
pub const MAX_NOTE_LEN: usize = 500;

// local@domain.tld with dot-separated labels, final label 2-4 chars
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("valid email regex"));

// optional leading '+', first digit 1-9, at most 16 digits total
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid mobile regex"));

/// A creation payload that passed every rule, with fields trimmed and the
/// email lower-cased, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub mobile_number: String,
    pub email_id: String,
    pub nature_of_services: String,
    pub work_related: String,
    pub note: String,
}

/// Check a raw creation payload against every rule. All violations are
/// collected, in a stable order, as human-readable messages; nothing is
/// short-circuited. Pure: never panics, never mutates the input.
pub fn validate_new_contact(input: &NewContact) -> Result<ValidContact, Vec<String>> {
    let mut errors = Vec::new();

    let name = trimmed(&input.name);
    let mobile = trimmed(&input.mobile_number);
    let email = trimmed(&input.email_id);
    let services = trimmed(&input.nature_of_services);
    let work = trimmed(&input.work_related);
    let note = trimmed(&input.note);

    // Required field validation
    if name.is_none() {
        errors.push("Name is required".to_string());
    }
    if mobile.is_none() {
        errors.push("Mobile number is required".to_string());
    }
    if email.is_none() {
        errors.push("Email ID is required".to_string());
    }
    if services.is_none() {
        errors.push("Nature of services is required".to_string());
    }
    if work.is_none() {
        errors.push("Work related field is required".to_string());
    }

    // Format validation
    if let Some(email) = email {
        if !EMAIL_RE.is_match(email) {
            errors.push("Please provide a valid email address".to_string());
        }
    }
    if let Some(mobile) = mobile {
        if !MOBILE_RE.is_match(mobile) {
            errors.push("Please provide a valid mobile number".to_string());
        }
    }

    // Length validation
    if let Some(name) = name {
        if name.chars().count() > MAX_NAME_LEN {
            errors.push("Name cannot exceed 100 characters".to_string());
        }
    }
    if let Some(services) = services {
        if services.chars().count() > MAX_SERVICES_LEN {
            errors.push("Nature of services cannot exceed 200 characters".to_string());
        }
    }
    if let Some(work) = work {
        if work.chars().count() > MAX_WORK_RELATED_LEN {
            errors.push("Work related field cannot exceed 200 characters".to_string());
        }
    }
    if let Some(note) = note {
        if note.chars().count() > MAX_NOTE_LEN {
            errors.push("Note cannot exceed 500 characters".to_string());
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All required fields are Some at this point; note defaults to empty.
    Ok(ValidContact {
        name: name.unwrap_or_default().to_string(),
        mobile_number: mobile.unwrap_or_default().to_string(),
        email_id: email.unwrap_or_default().to_lowercase(),
        nature_of_services: services.unwrap_or_default().to_string(),
        work_related: work.unwrap_or_default().to_string(),
        note: note.unwrap_or_default().to_string(),
    })
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
