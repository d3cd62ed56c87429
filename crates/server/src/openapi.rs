use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct CompanyDoc {
    pub id: Option<i32>,
    pub name: String,
    /// Derived on read; ignored on write
    pub employees: Vec<EmployeeDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::get,
        crate::routes::companies::employees,
        crate::routes::companies::create,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::create,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CompanyDoc,
            EmployeeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "employees")
    )
)]
pub struct ApiDoc;
