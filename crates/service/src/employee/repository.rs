use async_trait::async_trait;

use crate::domain::Employee;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Record access for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError>;
    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, ServiceError>;
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError>;
    /// Insert when `employee.id` is `None`, otherwise overwrite by id.
    async fn save(&self, employee: Employee) -> Result<Employee, ServiceError>;
    /// Absent ids are not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}
