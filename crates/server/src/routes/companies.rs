use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::domain::{Company, Employee};
use tracing::info;

use crate::{errors::JsonApiError, routes::requested_page, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number; paging needs `pageSize` too
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    params(ListQuery),
    responses(
        (status = 200, description = "All companies, or one page", body = [crate::openapi::CompanyDoc]),
        (status = 400, description = "Zero page number or size")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Company>>, JsonApiError> {
    let companies = match requested_page(q.page_number, q.page_size)? {
        Some((number, size)) => state.companies.find_by_page(number, size).await?,
        None => state.companies.find_all().await?,
    };
    info!(count = companies.len(), "list companies");
    Ok(Json(companies))
}

#[utoipa::path(
    get, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Company>, JsonApiError> {
    Ok(Json(state.companies.find_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/companies/{id}/employees", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "Employees of the company", body = [crate::openapi::EmployeeDoc]),
        (status = 404, description = "Not Found")
    )
)]
pub async fn employees(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let employees = state.companies.find_employees_by_company_id(id).await?;
    info!(company_id = id, count = employees.len(), "list company employees");
    Ok(Json(employees))
}

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CompanyDoc,
    responses((status = 201, description = "Created", body = crate::openapi::CompanyDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<Company>) -> Result<(StatusCode, Json<Company>), JsonApiError> {
    let created = state.companies.create(input).await?;
    info!(id = ?created.id, name = %created.name, "created company");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    request_body = crate::openapi::CompanyDoc,
    responses(
        (status = 204, description = "Renamed"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i32>, Json(input): Json<Company>) -> Result<StatusCode, JsonApiError> {
    state.companies.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses((status = 204, description = "Deleted or already absent"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.companies.delete(id).await?;
    info!(id, "deleted company");
    Ok(StatusCode::NO_CONTENT)
}
