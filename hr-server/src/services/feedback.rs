//! Peer feedback exchange

use shared::models::{Feedback, FeedbackCreate, FeedbackResponse};
use shared::util::{new_id, now_millis};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{EmployeeRepository, FeedbackRepository, UserRepository};
use crate::utils::{AppError, AppResult};

use super::require_caller_employee;

pub struct FeedbackService {
    feedback: FeedbackRepository,
    employees: EmployeeRepository,
    users: UserRepository,
}

impl FeedbackService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            feedback: FeedbackRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Record feedback from the caller to another employee.
    /// Self-feedback is rejected.
    pub async fn create(
        &self,
        caller: &CurrentUser,
        payload: FeedbackCreate,
    ) -> AppResult<FeedbackResponse> {
        let from = require_caller_employee(&self.users, &self.employees, caller).await?;

        let to = self
            .employees
            .find_by_id(&payload.to_employee_id)
            .await?
            .ok_or_else(|| AppError::not_found("To employee not found"))?;

        if from.id == to.id {
            return Err(AppError::business_rule("Cannot give feedback to yourself"));
        }

        let feedback = Feedback {
            id: new_id(),
            from_employee_id: from.id.clone(),
            to_employee_id: to.id.clone(),
            feedback_text: payload.feedback_text,
            created_at: now_millis(),
        };
        self.feedback.insert(&feedback).await?;

        Ok(FeedbackResponse {
            id: feedback.id,
            from_employee: self.employees.hydrate(from).await?,
            to_employee: self.employees.hydrate(to).await?,
            feedback_text: feedback.feedback_text,
            timestamp: feedback.created_at,
        })
    }

    /// Feedback addressed to the caller
    pub async fn received(&self, caller: &CurrentUser) -> AppResult<Vec<FeedbackResponse>> {
        let me = require_caller_employee(&self.users, &self.employees, caller).await?;
        let entries = self.feedback.find_received(&me.id).await?;
        self.hydrate_all(entries).await
    }

    /// Feedback written by the caller
    pub async fn given(&self, caller: &CurrentUser) -> AppResult<Vec<FeedbackResponse>> {
        let me = require_caller_employee(&self.users, &self.employees, caller).await?;
        let entries = self.feedback.find_given(&me.id).await?;
        self.hydrate_all(entries).await
    }

    async fn hydrate_all(&self, entries: Vec<Feedback>) -> AppResult<Vec<FeedbackResponse>> {
        let mut views = Vec::with_capacity(entries.len());
        for entry in entries {
            let from = self
                .employees
                .find_by_id(&entry.from_employee_id)
                .await?
                .ok_or_else(|| AppError::internal("Feedback without from-employee"))?;
            let to = self
                .employees
                .find_by_id(&entry.to_employee_id)
                .await?
                .ok_or_else(|| AppError::internal("Feedback without to-employee"))?;

            views.push(FeedbackResponse {
                id: entry.id,
                from_employee: self.employees.hydrate(from).await?,
                to_employee: self.employees.hydrate(to).await?,
                feedback_text: entry.feedback_text,
                timestamp: entry.created_at,
            });
        }
        Ok(views)
    }
}
