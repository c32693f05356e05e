use crate::models::{EmployeesData, NewEmployee, ReportQuery};
use crate::services::{ApiClient, ApiError};

pub async fn fetch_employees(
    client: &ApiClient,
    query: &ReportQuery,
) -> Result<EmployeesData, ApiError> {
    client
        .get(&format!("/employees{}", query.to_query_string()))
        .await
}

pub async fn create_employee(client: &ApiClient, employee: &NewEmployee) -> Result<(), ApiError> {
    client.post_empty("/employees", employee, true).await
}

pub async fn delete_employee(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/employees/{}", id), true).await
}
