//! Absence request lifecycle: PENDING → APPROVED | REJECTED

mod common;

use common::{date, seed_employee, seed_user, test_pool};
use hr_server::AppError;
use hr_server::db::repository::AbsenceRequestRepository;
use hr_server::services::AbsenceService;
use shared::models::{
    AbsenceCreate, AbsenceRequest, AbsenceRespond, AbsenceStatus, AbsenceType, Role,
};
use shared::util::new_id;

fn vacation(start: chrono::NaiveDate, end: chrono::NaiveDate) -> AbsenceCreate {
    AbsenceCreate {
        start_date: start,
        end_date: end,
        absence_type: AbsenceType::Vacation,
        reason: Some("family trip".to_string()),
    }
}

#[tokio::test]
async fn end_before_start_is_rejected() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", None).await;
    let caller = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;

    let err = service
        .create(&caller, vacation(date(2025, 1, 12), date(2025, 1, 10)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn request_reason_is_sanitized_before_storage() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", None).await;
    let caller = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;

    let payload = AbsenceCreate {
        start_date: date(2025, 2, 3),
        end_date: date(2025, 2, 4),
        absence_type: AbsenceType::Personal,
        reason: Some("<script>alert(1)</script>hello".to_string()),
    };
    let created = service.create(&caller, payload).await.unwrap();

    assert_eq!(created.reason.as_deref(), Some("hello"));
    assert_eq!(created.status, AbsenceStatus::Pending);
}

#[tokio::test]
async fn approval_happy_path_then_second_response_fails() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let boss = seed_employee(&pool, "Bea", "Boss", "bea@corp.test", None).await;
    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", Some(&boss.id)).await;
    let requester = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;
    let manager = seed_user(&pool, "bea.boss", Role::Manager, Some(&boss.id)).await;

    let created = service
        .create(&requester, vacation(date(2025, 1, 10), date(2025, 1, 12)))
        .await
        .unwrap();
    assert_eq!(created.status, AbsenceStatus::Pending);

    let resolved = service
        .respond(
            &manager,
            &created.id,
            AbsenceRespond {
                status: AbsenceStatus::Approved,
                manager_comment: Some("ok".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(resolved.status, AbsenceStatus::Approved);
    assert_eq!(
        resolved.approved_by.as_ref().map(|a| a.id.as_str()),
        Some(boss.id.as_str())
    );
    assert_eq!(resolved.manager_comment.as_deref(), Some("ok"));
    assert!(resolved.responded_at.is_some());

    // Terminal once resolved
    let err = service
        .respond(
            &manager,
            &created.id,
            AbsenceRespond {
                status: AbsenceStatus::Rejected,
                manager_comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BusinessRule(_)));
}

#[tokio::test]
async fn only_the_direct_manager_may_respond() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let boss = seed_employee(&pool, "Bea", "Boss", "bea@corp.test", None).await;
    let other = seed_employee(&pool, "Odo", "Other", "odo@corp.test", None).await;
    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", Some(&boss.id)).await;
    let requester = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;
    let wrong_manager = seed_user(&pool, "odo.other", Role::Manager, Some(&other.id)).await;

    let created = service
        .create(&requester, vacation(date(2025, 3, 1), date(2025, 3, 2)))
        .await
        .unwrap();

    let err = service
        .respond(
            &wrong_manager,
            &created.id,
            AbsenceRespond {
                status: AbsenceStatus::Approved,
                manager_comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
async fn responding_to_missing_request_is_not_found() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let boss = seed_employee(&pool, "Bea", "Boss", "bea@corp.test", None).await;
    let manager = seed_user(&pool, "bea.boss", Role::Manager, Some(&boss.id)).await;

    let err = service
        .respond(
            &manager,
            "no-such-request",
            AbsenceRespond {
                status: AbsenceStatus::Approved,
                manager_comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn responding_with_pending_status_is_rejected() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());

    let boss = seed_employee(&pool, "Bea", "Boss", "bea@corp.test", None).await;
    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", Some(&boss.id)).await;
    let requester = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;
    let manager = seed_user(&pool, "bea.boss", Role::Manager, Some(&boss.id)).await;

    let created = service
        .create(&requester, vacation(date(2025, 4, 7), date(2025, 4, 9)))
        .await
        .unwrap();

    let err = service
        .respond(
            &manager,
            &created.id,
            AbsenceRespond {
                status: AbsenceStatus::Pending,
                manager_comment: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn listings_order_by_request_time_and_filter_pending() {
    let pool = test_pool().await;
    let service = AbsenceService::new(pool.clone());
    let requests = AbsenceRequestRepository::new(pool.clone());

    let boss = seed_employee(&pool, "Bea", "Boss", "bea@corp.test", None).await;
    let emp = seed_employee(&pool, "Ana", "Aria", "ana@corp.test", Some(&boss.id)).await;
    let requester = seed_user(&pool, "ana.aria", Role::Employee, Some(&emp.id)).await;
    let manager = seed_user(&pool, "bea.boss", Role::Manager, Some(&boss.id)).await;

    // Two requests with explicit timestamps; the older one is already approved
    let older = AbsenceRequest {
        id: new_id(),
        employee_id: emp.id.clone(),
        start_date: date(2025, 1, 6),
        end_date: date(2025, 1, 7),
        absence_type: AbsenceType::SickLeave,
        reason: None,
        status: AbsenceStatus::Approved,
        approved_by_id: Some(boss.id.clone()),
        requested_at: 1_000,
        responded_at: Some(2_000),
        manager_comment: None,
    };
    let newer = AbsenceRequest {
        id: new_id(),
        employee_id: emp.id.clone(),
        start_date: date(2025, 2, 10),
        end_date: date(2025, 2, 11),
        absence_type: AbsenceType::Vacation,
        reason: None,
        status: AbsenceStatus::Pending,
        approved_by_id: None,
        requested_at: 2_000,
        responded_at: None,
        manager_comment: None,
    };
    requests.insert(&older).await.unwrap();
    requests.insert(&newer).await.unwrap();

    let mine = service.my_requests(&requester).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].id, newer.id);
    assert_eq!(mine[1].id, older.id);

    // Team view carries every status; the pending view filters
    assert_eq!(service.team_requests(&manager).await.unwrap().len(), 2);
    let pending = service.pending_requests(&manager).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, newer.id);
}
