use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    company::{CompanyRepository, CompanyService},
    employee::{EmployeeRepository, EmployeeService},
    repo::{
        memory::InMemoryStore,
        seaorm::{SeaOrmCompanyRepository, SeaOrmEmployeeRepository},
    },
};

/// Shared handler state: one service per entity.
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyService>,
    pub employees: Arc<EmployeeService>,
}

impl AppState {
    pub fn new(companies: Arc<dyn CompanyRepository>, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            companies: Arc::new(CompanyService::new(companies)),
            employees: Arc::new(EmployeeService::new(employees)),
        }
    }

    /// Services backed by the relational store.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCompanyRepository::new(db.clone())),
            Arc::new(SeaOrmEmployeeRepository::new(db)),
        )
    }

    /// Services backed by a process-local store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::default());
        Self::new(store.clone(), store)
    }
}
