use async_trait::async_trait;

use crate::domain::Company;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Record access for companies. Every returned company carries its derived
/// employee list.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Company>, ServiceError>;
    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, ServiceError>;
    /// Insert when `company.id` is `None`, otherwise overwrite by id.
    async fn save(&self, company: Company) -> Result<Company, ServiceError>;
    /// Absent ids are not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}
