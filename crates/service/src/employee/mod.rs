//! Employee subsystem: record access trait and the service on top of it.

pub mod repository;
pub mod service;

pub use repository::EmployeeRepository;
pub use service::EmployeeService;
