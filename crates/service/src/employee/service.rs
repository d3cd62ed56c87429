use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::Employee;
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Application service for employees.
pub struct EmployeeService<R: EmployeeRepository + ?Sized = dyn EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        self.repo.find_all().await
    }

    /// `page_number` counts from 1.
    #[instrument(skip(self))]
    pub async fn find_by_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Employee>, ServiceError> {
        self.repo.find_all_paged(PageRequest::from_page_number(page_number, page_size)).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Employee, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("employee", id))
    }

    pub async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError> {
        self.repo.find_by_gender(gender).await
    }

    /// Overwrites name, age, gender and salary. The id and the company
    /// assignment are kept.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: Employee) -> Result<(), ServiceError> {
        let mut employee = self.find_by_id(id).await?;
        employee.name = patch.name;
        employee.age = patch.age;
        employee.gender = patch.gender;
        employee.salary = patch.salary;
        self.repo.save(employee).await?;
        info!(employee_id = id, "employee_updated");
        Ok(())
    }

    /// A caller-supplied id is discarded; the store assigns one.
    #[instrument(skip(self, employee))]
    pub async fn create(&self, employee: Employee) -> Result<Employee, ServiceError> {
        let saved = self.repo.save(Employee { id: None, ..employee }).await?;
        info!(employee_id = ?saved.id, company_id = ?saved.company_id, "employee_created");
        Ok(saved)
    }

    /// No existence check; deleting a missing id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
