use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use models::{company, employee};

use crate::company::repository::CompanyRepository;
use crate::domain::{Company, Employee};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// SeaORM-backed company repository. Employees are attached with one extra
/// `company_id IN (..)` query per call.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn employees_of(&self, company_id: i32) -> Result<Vec<Employee>, ServiceError> {
        let rows = employee::find_by_company_ids(&self.db, &[company_id]).await?;
        Ok(into_domain(rows))
    }

    async fn with_employees(&self, rows: Vec<company::Model>) -> Result<Vec<Company>, ServiceError> {
        let ids: Vec<i32> = rows.iter().map(|c| c.id).collect();
        let mut by_company: HashMap<i32, Vec<Employee>> = HashMap::new();
        for e in employee::find_by_company_ids(&self.db, &ids).await? {
            if let Some(cid) = e.company_id {
                by_company.entry(cid).or_default().push(e.into());
            }
        }
        Ok(rows
            .into_iter()
            .map(|c| {
                let employees = by_company.remove(&c.id).unwrap_or_default();
                Company::from_row(c, employees)
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        let rows = company::find_all(&self.db).await?;
        self.with_employees(rows).await
    }

    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Company>, ServiceError> {
        let rows = company::find_slice(&self.db, page.offset(), page.limit()).await?;
        self.with_employees(rows).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, ServiceError> {
        let Some(row) = company::find_by_id(&self.db, id).await? else { return Ok(None) };
        let employees = self.employees_of(row.id).await?;
        Ok(Some(Company::from_row(row, employees)))
    }

    async fn save(&self, c: Company) -> Result<Company, ServiceError> {
        let row = company::save(&self.db, c.id, &c.name).await?;
        let employees = self.employees_of(row.id).await?;
        Ok(Company::from_row(row, employees))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        company::delete_by_id(&self.db, id).await?;
        Ok(())
    }
}

/// SeaORM-backed employee repository.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn into_domain(rows: Vec<employee::Model>) -> Vec<Employee> {
    rows.into_iter().map(Employee::from).collect()
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(into_domain(employee::find_all(&self.db).await?))
    }

    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<Employee>, ServiceError> {
        Ok(into_domain(employee::find_slice(&self.db, page.offset(), page.limit()).await?))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, ServiceError> {
        Ok(employee::find_by_id(&self.db, id).await?.map(Employee::from))
    }

    async fn find_by_gender(&self, gender: &str) -> Result<Vec<Employee>, ServiceError> {
        Ok(into_domain(employee::find_by_gender(&self.db, gender).await?))
    }

    async fn save(&self, e: Employee) -> Result<Employee, ServiceError> {
        Ok(employee::save(&self.db, e.id, e.fields()).await?.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        employee::delete_by_id(&self.db, id).await?;
        Ok(())
    }
}
