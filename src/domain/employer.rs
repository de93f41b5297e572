//! The employer entity and the columns it maps to.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// One employer record.
///
/// `id` is `None` until the record has been persisted. A caller may set it
/// beforehand, but insertion always lets the store allocate the identity and
/// overwrites whatever was requested; only the value after `create` is
/// authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Employer {
    pub id: Option<i64>,
    /// `NOT NULL` in the table. `Some("")` is a valid name.
    pub name: Option<String>,
    pub sector: Option<String>,
    pub summary: Option<String>,
}

impl Employer {
    /// Creates an unsaved employer.
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            sector: Some(sector.into()),
            summary: Some(summary.into()),
        }
    }

    /// Creates an unsaved employer without a name. Persisting it fails.
    pub fn unnamed(sector: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            sector: Some(sector.into()),
            summary: Some(summary.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_sector(&mut self, sector: impl Into<String>) {
        self.sector = Some(sector.into());
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }
}

/// Queryable columns of the `employers` table.
///
/// Field-name queries go through this enum so that only known column names
/// ever reach SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployerField {
    Id,
    Name,
    Sector,
    Summary,
}

impl EmployerField {
    pub fn column(self) -> &'static str {
        match self {
            EmployerField::Id => "id",
            EmployerField::Name => "name",
            EmployerField::Sector => "sector",
            EmployerField::Summary => "summary",
        }
    }
}

impl fmt::Display for EmployerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employer field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for EmployerField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(EmployerField::Id),
            "name" => Ok(EmployerField::Name),
            "sector" => Ok(EmployerField::Sector),
            "summary" => Ok(EmployerField::Summary),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
