//! Absence workflow
//!
//! PENDING → APPROVED | REJECTED and nothing else. A resolved request is
//! immutable; only the requester's direct manager may resolve it.

use shared::models::{
    AbsenceCreate, AbsenceRequest, AbsenceRequestResponse, AbsenceRespond, AbsenceStatus,
};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{AbsenceRequestRepository, EmployeeRepository, UserRepository};
use crate::utils::{AppError, AppResult, sanitize};

use super::require_caller_employee;

pub struct AbsenceService {
    requests: AbsenceRequestRepository,
    employees: EmployeeRepository,
    users: UserRepository,
}

impl AbsenceService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            requests: AbsenceRequestRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// File a new absence request for the caller.
    ///
    /// The reason passes through the markup sanitizer before storage; the
    /// request starts PENDING with the requested timestamp set to now.
    pub async fn create(
        &self,
        caller: &CurrentUser,
        payload: AbsenceCreate,
    ) -> AppResult<AbsenceRequestResponse> {
        let employee = require_caller_employee(&self.users, &self.employees, caller).await?;

        if payload.end_date < payload.start_date {
            return Err(AppError::validation("End date must be after start date"));
        }

        let request = AbsenceRequest {
            id: new_id(),
            employee_id: employee.id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            absence_type: payload.absence_type,
            reason: payload.reason.map(|r| sanitize(&r)),
            status: AbsenceStatus::Pending,
            approved_by_id: None,
            requested_at: now_millis(),
            responded_at: None,
            manager_comment: None,
        };
        self.requests.insert(&request).await?;

        self.hydrate(request).await
    }

    /// The caller's own requests, most recent first
    pub async fn my_requests(&self, caller: &CurrentUser) -> AppResult<Vec<AbsenceRequestResponse>> {
        let employee = require_caller_employee(&self.users, &self.employees, caller).await?;
        let requests = self.requests.find_by_employee(&employee.id).await?;
        self.hydrate_all(requests).await
    }

    /// All requests from the caller's direct reports, most recent first
    pub async fn team_requests(
        &self,
        caller: &CurrentUser,
    ) -> AppResult<Vec<AbsenceRequestResponse>> {
        let manager = require_caller_employee(&self.users, &self.employees, caller).await?;
        let requests = self.requests.find_by_manager(&manager.id).await?;
        self.hydrate_all(requests).await
    }

    /// Team requests still awaiting a decision
    pub async fn pending_requests(
        &self,
        caller: &CurrentUser,
    ) -> AppResult<Vec<AbsenceRequestResponse>> {
        let manager = require_caller_employee(&self.users, &self.employees, caller).await?;
        let requests = self
            .requests
            .find_by_manager(&manager.id)
            .await?
            .into_iter()
            .filter(|r| r.status == AbsenceStatus::Pending)
            .collect();
        self.hydrate_all(requests).await
    }

    /// Resolve a pending request as the requester's direct manager.
    ///
    /// The manager comment is stored verbatim — it is authored by the
    /// manager, not untrusted rich text.
    pub async fn respond(
        &self,
        caller: &CurrentUser,
        request_id: &str,
        payload: AbsenceRespond,
    ) -> AppResult<AbsenceRequestResponse> {
        let mut request = self
            .requests
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Absence request not found"))?;

        let manager = require_caller_employee(&self.users, &self.employees, caller).await?;

        let requester = self
            .employees
            .find_by_id(&request.employee_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        if requester.manager_id.as_deref() != Some(manager.id.as_str()) {
            return Err(AppError::forbidden(
                "You are not authorized to respond to this request",
            ));
        }

        if request.status != AbsenceStatus::Pending {
            return Err(AppError::business_rule(
                "This request has already been processed",
            ));
        }

        if payload.status == AbsenceStatus::Pending {
            return Err(AppError::validation(
                "Response status must be APPROVED or REJECTED",
            ));
        }

        let responded_at = now_millis();
        self.requests
            .record_response(
                &request.id,
                payload.status,
                &manager.id,
                responded_at,
                payload.manager_comment.as_deref(),
            )
            .await?;

        request.status = payload.status;
        request.approved_by_id = Some(manager.id);
        request.responded_at = Some(responded_at);
        request.manager_comment = payload.manager_comment;

        self.hydrate(request).await
    }

    async fn hydrate(&self, request: AbsenceRequest) -> AppResult<AbsenceRequestResponse> {
        let employee = self
            .employees
            .find_by_id(&request.employee_id)
            .await?
            .ok_or_else(|| AppError::internal("Absence request without employee"))?;
        let employee = self.employees.hydrate(employee).await?;

        let approved_by = match &request.approved_by_id {
            Some(id) => match self.employees.find_by_id(id).await? {
                Some(approver) => Some(self.employees.hydrate(approver).await?),
                None => None,
            },
            None => None,
        };

        Ok(AbsenceRequestResponse {
            id: request.id,
            employee,
            start_date: request.start_date,
            end_date: request.end_date,
            absence_type: request.absence_type,
            reason: request.reason,
            status: request.status,
            approved_by,
            requested_at: request.requested_at,
            responded_at: request.responded_at,
            manager_comment: request.manager_comment,
        })
    }

    async fn hydrate_all(
        &self,
        requests: Vec<AbsenceRequest>,
    ) -> AppResult<Vec<AbsenceRequestResponse>> {
        let mut views = Vec::with_capacity(requests.len());
        for request in requests {
            views.push(self.hydrate(request).await?);
        }
        Ok(views)
    }
}
