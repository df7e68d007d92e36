use crate::db::{decode_rows, encode_row, Filter, Query, TableClient};
use crate::errors::QueryError;
use crate::models::employee::{Employee, EmployeeChanges, NewEmployee, EMPLOYEES_TABLE};
use crate::models::options::SelectOption;

const EMPLOYEE_COLUMNS: [&str; 6] = [
    "Adm_num",
    "EE_NameF",
    "EE_NameL",
    "EE_HireDate",
    "EE_TermDate",
    "EE_StatusCode",
];

pub async fn list_employees(client: &dyn TableClient) -> Result<Vec<Employee>, QueryError> {
    let rows = client
        .select(
            &Query::table(EMPLOYEES_TABLE)
                .select(&EMPLOYEE_COLUMNS)
                .order_by("Adm_num", false),
        )
        .await?;
    decode_rows(rows)
}

pub async fn find_employee(client: &dyn TableClient, id: i64) -> Result<Option<Employee>, QueryError> {
    let rows = client
        .select(
            &Query::table(EMPLOYEES_TABLE)
                .select(&EMPLOYEE_COLUMNS)
                .eq("Adm_num", id)
                .limit(1),
        )
        .await?;
    Ok(decode_rows(rows)?.into_iter().next())
}

/// Inserts a new employee as Active with the sentinel termination date.
pub async fn add_employee(client: &dyn TableClient, new_employee: NewEmployee) -> Result<Employee, QueryError> {
    let record = new_employee.into_record();
    client.insert(EMPLOYEES_TABLE, encode_row(&record)?).await?;
    log::info!("Employee {} added", record.id);
    Ok(record)
}

pub async fn update_employee(
    client: &dyn TableClient,
    id: i64,
    changes: &EmployeeChanges,
) -> Result<u64, QueryError> {
    let touched = client
        .update(
            EMPLOYEES_TABLE,
            encode_row(changes)?,
            &[Filter::Eq("Adm_num".to_string(), id.into())],
        )
        .await?;
    log::info!("Employee {} updated ({} row(s))", id, touched);
    Ok(touched)
}

/// Selection options for employees; terminated staff are left out when `active_only`.
pub fn employee_options(employees: &[Employee], active_only: bool) -> Vec<SelectOption> {
    employees
        .iter()
        .filter(|e| !active_only || e.is_active())
        .map(SelectOption::from)
        .collect()
}
