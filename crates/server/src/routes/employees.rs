use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::domain::Employee;
use tracing::info;

use crate::{errors::JsonApiError, routes::requested_page, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Exact match; takes precedence over paging
    pub gender: Option<String>,
    /// 1-based page number; paging needs `pageSize` too
    pub page_number: Option<u64>,
    pub page_size: Option<u64>,
}

#[utoipa::path(
    get, path = "/employees", tag = "employees",
    params(ListQuery),
    responses(
        (status = 200, description = "All employees, one gender, or one page", body = [crate::openapi::EmployeeDoc]),
        (status = 400, description = "Zero page number or size")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let employees = if let Some(gender) = q.gender.as_deref() {
        state.employees.find_by_gender(gender).await?
    } else {
        match requested_page(q.page_number, q.page_size)? {
            Some((number, size)) => state.employees.find_by_page(number, size).await?,
            None => state.employees.find_all().await?,
        }
    };
    info!(count = employees.len(), "list employees");
    Ok(Json(employees))
}

#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/employees", tag = "employees",
    request_body = crate::openapi::EmployeeDoc,
    responses((status = 201, description = "Created", body = crate::openapi::EmployeeDoc))
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<Employee>) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let created = state.employees.create(input).await?;
    info!(id = ?created.id, company_id = ?created.company_id, "created employee");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    request_body = crate::openapi::EmployeeDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i32>, Json(input): Json<Employee>) -> Result<StatusCode, JsonApiError> {
    state.employees.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses((status = 204, description = "Deleted or already absent"))
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.employees.delete(id).await?;
    info!(id, "deleted employee");
    Ok(StatusCode::NO_CONTENT)
}
