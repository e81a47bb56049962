// File: shikayat-core/src/models/mod.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Status assigned to every freshly submitted complaint. The set of
/// status values is open-ended; this is just the starting label.
pub const DEFAULT_STATUS: &str = "Pending";

/// One submitted grievance, as stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Complaint {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A complaint that has passed submission validation but has not been
/// persisted yet. Construction is the only way to get one, so any
/// `NewComplaint` is known to have all required fields non-empty.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub name: String,
    pub email: String,
    pub role: String,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl NewComplaint {
    /// Trim every field and reject the submission if any required field
    /// ends up empty. Optional fields collapse to `None` when blank.
    pub fn new(
        name: &str,
        email: &str,
        role: &str,
        title: &str,
        description: &str,
        category: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self, Error> {
        let name = name.trim();
        let email = email.trim();
        let role = role.trim();
        let title = title.trim();
        let description = description.trim();

        let mut missing = Vec::new();
        for (field, value) in [
            ("name", name),
            ("email", email),
            ("role", role),
            ("title", title),
            ("description", description),
        ] {
            if value.is_empty() {
                missing.push(field);
            }
        }
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        let optional = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: optional(category),
            location: optional(location),
        })
    }
}

/// Filter predicate for the listing query. All constraints AND together;
/// `None` imposes nothing.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    /// Case-insensitive substring of title, description or location.
    pub q: Option<String>,
    /// Exact status match.
    pub status: Option<String>,
    /// Exact role match.
    pub role: Option<String>,
}

impl ComplaintFilter {
    /// Build a filter from raw (possibly blank) query parameters.
    pub fn from_params(
        q: Option<String>,
        status: Option<String>,
        role: Option<String>,
    ) -> Self {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            q: clean(q),
            status: clean(status),
            role: clean(role),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.status.is_none() && self.role.is_none()
    }
}
