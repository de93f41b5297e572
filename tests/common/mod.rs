//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use employer_store::{Employer, EmployerService};

/// A service over its own private in-memory database with an empty table.
pub async fn fresh_service() -> EmployerService {
    let service = EmployerService::in_memory()
        .await
        .expect("in-memory database should open");
    service
        .ensure_schema()
        .await
        .expect("schema bootstrap should be idempotent");
    service
}

pub fn tech_companies() -> Vec<Employer> {
    vec![
        Employer::new(
            "Salesforce",
            "Tech",
            "An American cloud-based software company focused on customer relationship management services!",
        ),
        Employer::new(
            "Sonos",
            "Tech",
            "Sonos is a developer and manufacturer of audio products best known for its multi-room audio products!",
        ),
        Employer::new(
            "Fedex",
            "Transportation/E-Commerce",
            "An American multinational conglomerate holding company which focuses on transportation, e-commerce and business services!",
        ),
        Employer::new(
            "First Solar",
            "Energy",
            "A leading global provider of comprehensive PV solar solutions!",
        ),
    ]
}

pub fn pair(first: &str, second: &str) -> Vec<Employer> {
    vec![
        Employer::new(first, "Tech", "A cloud-based software company."),
        Employer::new(second, "Tech", "A manufacturer of audio products."),
    ]
}
