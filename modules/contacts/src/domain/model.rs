use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pure contact model, independent of storage and wire formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub mobile_number: String,
    /// Always stored lower-cased.
    pub email_id: String,
    pub nature_of_services: String,
    pub work_related: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw creation payload as submitted by a client. Every field is optional so
/// the validator — not the deserializer — can report each missing field by
/// name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub email_id: Option<String>,
    pub nature_of_services: Option<String>,
    pub work_related: Option<String>,
    pub note: Option<String>,
}

/// Free-text filters for listing. All provided filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Case-insensitive substring matched against name, email or mobile number.
    pub search: Option<String>,
    /// Case-insensitive substring over `nature_of_services`.
    pub nature_of_services: Option<String>,
    /// Case-insensitive substring over `work_related`.
    pub work_related: Option<String>,
}

impl ContactFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.nature_of_services.is_none() && self.work_related.is_none()
    }
}

/// Fields the listing endpoint can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    EmailId,
    MobileNumber,
    NatureOfServices,
    WorkRelated,
}

impl SortField {
    /// Parse a client-supplied field name. Unknown names fall back to
    /// `createdAt`, the listing default.
    pub fn parse(s: &str) -> Self {
        match s {
            "createdAt" => Self::CreatedAt,
            "updatedAt" => Self::UpdatedAt,
            "name" => Self::Name,
            "emailId" => Self::EmailId,
            "mobileNumber" => Self::MobileNumber,
            "natureOfServices" => Self::NatureOfServices,
            "workRelated" => Self::WorkRelated,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than "asc" sorts descending, the listing default.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

/// Fully-resolved listing request after defaulting and clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    pub filter: ContactFilter,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}

/// One page of results plus derived pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_contacts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One `nature_of_services` value with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCount {
    pub service: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStats {
    pub total_contacts: u64,
    /// Contacts created within the recent window (7 days by default).
    pub recent_contacts: u64,
    /// Top distinct services by descending frequency.
    pub top_services: Vec<ServiceCount>,
}
