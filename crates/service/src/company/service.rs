use std::sync::Arc;

use tracing::{info, instrument};

use crate::company::repository::CompanyRepository;
use crate::domain::{Company, Employee};
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Application service for companies.
pub struct CompanyService<R: CompanyRepository + ?Sized = dyn CompanyRepository> {
    repo: Arc<R>,
}

impl<R: CompanyRepository + ?Sized> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        self.repo.find_all().await
    }

    /// `page_number` counts from 1.
    #[instrument(skip(self))]
    pub async fn find_by_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Company>, ServiceError> {
        self.repo.find_all_paged(PageRequest::from_page_number(page_number, page_size)).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Company, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("company", id))
    }

    /// Rename only; every other field of `patch` is ignored.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: Company) -> Result<(), ServiceError> {
        let mut company = self.find_by_id(id).await?;
        company.name = patch.name;
        self.repo.save(company).await?;
        info!(company_id = id, "company_updated");
        Ok(())
    }

    /// Store a new company and return it with the id the store assigned.
    /// A caller-supplied id is discarded.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{company::CompanyService, domain::Company, repo::memory::InMemoryStore};
    /// let svc = CompanyService::new(Arc::new(InMemoryStore::default()));
    /// let created = tokio_test::block_on(svc.create(Company::named("ABC"))).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, company))]
    pub async fn create(&self, company: Company) -> Result<Company, ServiceError> {
        let saved = self.repo.save(Company { id: None, ..company }).await?;
        info!(company_id = ?saved.id, "company_created");
        Ok(saved)
    }

    pub async fn find_employees_by_company_id(&self, id: i32) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.find_by_id(id).await?.employees)
    }

    /// No existence check; deleting a missing id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
