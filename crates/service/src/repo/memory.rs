use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use models::errors::ModelError;

use crate::company::repository::CompanyRepository;
use crate::domain::{Company, Employee};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// In-memory store implementing both repositories, with the same observable
/// behavior as the SQL schema: ids start at 1 and increase, rows come back in
/// id order, and deleting a company detaches its employees.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    companies: BTreeMap<i32, String>,
    employees: BTreeMap<i32, Employee>,
    last_company_id: i32,
    last_employee_id: i32,
}

impl Tables {
    fn company(&self, id: i32, name: &str) -> Company {
        let employees = self.employees.values().filter(|e| e.company_id == Some(id)).cloned().collect();
        Company { id: Some(id), name: name.to_string(), employees }
    }

    fn companies(&self) -> Vec<Company> {
        self.companies.iter().map(|(id, name)| self.company(*id, name)).collect()
    }
}

fn assign_id(requested: Option<i32>, last: &mut i32, entity: &str) -> Result<i32, ServiceError> {
    match requested {
        Some(id) => {
            *last = (*last).max(id);
            Ok(id)
        }
        None => {
            *last = last
                .checked_add(1)
                .ok_or_else(|| ModelError::Db(format!("{entity} id sequence exhausted")))?;
            Ok(*last)
        }
    }
}

#[async_trait]
impl CompanyRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        Ok(self.tables.lock().await.companies())
    }

    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError> {
        Ok(page.slice(&self.tables.lock().await.companies()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, ServiceError> {
        let tables = self.tables.lock().await;
        Ok(tables.companies.get(&id).map(|name| tables.company(id, name)))
    }

    async fn save(&self, company: Company) -> Result<Company, ServiceError> {
        let mut tables = self.tables.lock().await;
        let id = assign_id(company.id, &mut tables.last_company_id, "company")?;
        tables.companies.insert(id, company.name.clone());
        Ok(tables.company(id, &company.name))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let mut tables = self.tables.lock().await;
        if tables.companies.remove(&id).is_some() {
            for e in tables.employees.values_mut().filter(|e| e.company_id == Some(id)) {
                e.company_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.tables.lock().await.employees.values().cloned().collect())
    }

    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError> {
        let all: Vec<Employee> = self.tables.lock().await.employees.values().cloned().collect();
        Ok(page.slice(&all))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, ServiceError> {
        Ok(self.tables.lock().await.employees.get(&id).cloned())
    }

    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError> {
        let tables = self.tables.lock().await;
        Ok(tables.employees.values().filter(|e| e.gender == gender).cloned().collect())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, ServiceError> {
        let mut tables = self.tables.lock().await;
        let id = assign_id(employee.id, &mut tables.last_employee_id, "employee")?;
        let stored = Employee { id: Some(id), ..employee };
        tables.employees.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.tables.lock().await.employees.remove(&id);
        Ok(())
    }
}
