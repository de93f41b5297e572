pub mod employer_service;

pub use employer_service::EmployerService;
