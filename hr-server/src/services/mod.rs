//! Service layer
//!
//! Business rules over the repositories. Every operation takes the
//! authenticated caller as an explicit parameter — there is no ambient
//! authentication context anywhere below the HTTP middleware.

pub mod absence;
pub mod employee;
pub mod feedback;
pub mod suggestion;
pub mod team;

pub use absence::AbsenceService;
pub use employee::EmployeeService;
pub use feedback::FeedbackService;
pub use suggestion::{SuggestionConfig, SuggestionService};
pub use team::TeamService;

use shared::models::Employee;

use crate::auth::CurrentUser;
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::utils::{AppError, AppResult};

/// Resolve the caller's linked employee record, if any.
///
/// The caller's user row is looked up fresh on every call; a token issued
/// before a link change never sees stale identity.
pub(crate) async fn caller_employee(
    users: &UserRepository,
    employees: &EmployeeRepository,
    caller: &CurrentUser,
) -> AppResult<Option<Employee>> {
    let Some(user) = users.find_by_username(&caller.username).await? else {
        return Ok(None);
    };
    let Some(employee_id) = user.employee_id else {
        return Ok(None);
    };
    Ok(employees.find_by_id(&employee_id).await?)
}

/// Like [`caller_employee`] but failing when there is no linked employee
pub(crate) async fn require_caller_employee(
    users: &UserRepository,
    employees: &EmployeeRepository,
    caller: &CurrentUser,
) -> AppResult<Employee> {
    caller_employee(users, employees, caller)
        .await?
        .ok_or_else(|| AppError::not_found("No employee profile found for current user"))
}
