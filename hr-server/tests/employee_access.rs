//! Role-scoped employee visibility and mutation rules

mod common;

use common::{date, seed_employee, seed_team, seed_user, test_pool};
use hr_server::AppError;
use hr_server::db::repository::{EmployeeRepository, TeamRepository, UserRepository};
use hr_server::services::EmployeeService;
use shared::models::{EmployeeCreate, EmployeeUpdate, OwnProfileUpdate, Role};

fn create_payload(email: &str) -> EmployeeCreate {
    EmployeeCreate {
        first_name: "Nora".to_string(),
        last_name: "Quinn".to_string(),
        email: email.to_string(),
        position: "Analyst".to_string(),
        department: "Finance".to_string(),
        hire_date: date(2024, 3, 11),
        salary: 55_000.0,
        manager_id: None,
        team_ids: None,
    }
}

fn update_payload(first: &str, email: &str) -> EmployeeUpdate {
    EmployeeUpdate {
        first_name: first.to_string(),
        last_name: "Quinn".to_string(),
        email: email.to_string(),
        position: None,
        department: None,
        hire_date: None,
        salary: None,
        manager_id: None,
        team_ids: None,
    }
}

#[tokio::test]
async fn hr_lists_all_employees_manager_lists_direct_reports_only() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let boss = seed_employee(&pool, "Mara", "Boss", "mara@corp.test", None).await;
    let report = seed_employee(&pool, "Rene", "Report", "rene@corp.test", Some(&boss.id)).await;
    // Transitive report: managed by the report, not by the boss
    seed_employee(&pool, "Tess", "Second", "tess@corp.test", Some(&report.id)).await;

    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;
    let manager = seed_user(&pool, "mara.boss", Role::Manager, Some(&boss.id)).await;
    let employee = seed_user(&pool, "rene.report", Role::Employee, Some(&report.id)).await;

    assert_eq!(service.list(&hr).await.unwrap().len(), 3);

    let manager_view = service.list(&manager).await.unwrap();
    assert_eq!(manager_view.len(), 1);
    assert_eq!(manager_view[0].id, report.id);

    assert!(service.list(&employee).await.unwrap().is_empty());
}

#[tokio::test]
async fn manager_without_linked_employee_lists_nothing() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    seed_employee(&pool, "Some", "One", "one@corp.test", None).await;
    let unlinked = seed_user(&pool, "ghost.manager", Role::Manager, None).await;

    assert!(service.list(&unlinked).await.unwrap().is_empty());
}

#[tokio::test]
async fn get_collapses_forbidden_into_not_found() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let boss = seed_employee(&pool, "Mara", "Boss", "mara@corp.test", None).await;
    let report = seed_employee(&pool, "Rene", "Report", "rene@corp.test", Some(&boss.id)).await;
    let outsider = seed_employee(&pool, "Omar", "Out", "omar@corp.test", None).await;

    let manager = seed_user(&pool, "mara.boss", Role::Manager, Some(&boss.id)).await;
    let employee = seed_user(&pool, "rene.report", Role::Employee, Some(&report.id)).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    // HR: anything, 404 only for truly absent ids
    assert!(service.get(&hr, &outsider.id).await.is_ok());
    assert!(matches!(
        service.get(&hr, "no-such-id").await,
        Err(AppError::NotFound(_))
    ));

    // Manager: self and direct report visible, others read as absent
    assert!(service.get(&manager, &boss.id).await.is_ok());
    assert!(service.get(&manager, &report.id).await.is_ok());
    assert!(matches!(
        service.get(&manager, &outsider.id).await,
        Err(AppError::NotFound(_))
    ));

    // Employee: self only
    assert!(service.get(&employee, &report.id).await.is_ok());
    assert!(matches!(
        service.get(&employee, &boss.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn duplicate_email_fails_and_persists_nothing() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    seed_employee(&pool, "Xena", "Young", "x@y.com", None).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    let err = service.create(&hr, create_payload("x@y.com")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(service.list(&hr).await.unwrap().len(), 1);
}

#[tokio::test]
async fn manager_created_employee_reports_to_the_manager() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let boss = seed_employee(&pool, "Mara", "Boss", "mara@corp.test", None).await;
    let other = seed_employee(&pool, "Omar", "Other", "omar@corp.test", None).await;
    let manager = seed_user(&pool, "mara.boss", Role::Manager, Some(&boss.id)).await;

    // The request names another manager; a MANAGER caller overrides it
    let mut payload = create_payload("nora@corp.test");
    payload.manager_id = Some(other.id.clone());

    let created = service.create(&manager, payload).await.unwrap();
    assert_eq!(created.manager_id.as_deref(), Some(boss.id.as_str()));
}

#[tokio::test]
async fn employee_role_cannot_create() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let emp = seed_employee(&pool, "Rene", "Report", "rene@corp.test", None).await;
    let caller = seed_user(&pool, "rene.report", Role::Employee, Some(&emp.id)).await;

    let err = service
        .create(&caller, create_payload("new@corp.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}

#[tokio::test]
async fn team_membership_round_trip_on_create_and_update() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());
    let teams = TeamRepository::new(pool.clone());

    let t1 = seed_team(&pool, "Platform", None).await;
    let t2 = seed_team(&pool, "Tooling", None).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    let mut payload = create_payload("nora@corp.test");
    payload.team_ids = Some(vec![t1.id.clone(), t2.id.clone(), "ghost-team".to_string()]);
    let created = service.create(&hr, payload).await.unwrap();

    assert!(teams.member_ids(&t1.id).await.unwrap().contains(&created.id));
    assert!(teams.member_ids(&t2.id).await.unwrap().contains(&created.id));

    // Full recompute: only T2 remains
    let mut update = update_payload("Nora", "nora@corp.test");
    update.team_ids = Some(vec![t2.id.clone()]);
    service.update(&hr, &created.id, update).await.unwrap();

    assert!(!teams.member_ids(&t1.id).await.unwrap().contains(&created.id));
    assert!(teams.member_ids(&t2.id).await.unwrap().contains(&created.id));

    // Present-but-empty list clears everything
    let mut clear = update_payload("Nora", "nora@corp.test");
    clear.team_ids = Some(vec![]);
    service.update(&hr, &created.id, clear).await.unwrap();
    assert!(teams.member_ids(&t2.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn manager_update_rules_distinguish_forbidden_from_not_found() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let boss = seed_employee(&pool, "Mara", "Boss", "mara@corp.test", None).await;
    let report = seed_employee(&pool, "Rene", "Report", "rene@corp.test", Some(&boss.id)).await;
    let outsider = seed_employee(&pool, "Omar", "Out", "omar@corp.test", None).await;
    let manager = seed_user(&pool, "mara.boss", Role::Manager, Some(&boss.id)).await;

    // Editing own record is an authorization failure, not a 404
    let err = service
        .update(&manager, &boss.id, update_payload("Mara", "mara@corp.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // Editing a non-report likewise
    let err = service
        .update(&manager, &outsider.id, update_payload("Omar", "omar@corp.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // An absent id is a plain not-found
    let err = service
        .update(&manager, "no-such-id", update_payload("No", "no@corp.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // A direct report can be edited
    let updated = service
        .update(&manager, &report.id, update_payload("Renee", "rene@corp.test"))
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Renee");
}

#[tokio::test]
async fn update_keeps_own_email_but_rejects_taken_one() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let a = seed_employee(&pool, "Ana", "First", "ana@corp.test", None).await;
    seed_employee(&pool, "Ben", "Second", "ben@corp.test", None).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    // Re-submitting the unchanged email passes the uniqueness check
    assert!(service
        .update(&hr, &a.id, update_payload("Ana", "ana@corp.test"))
        .await
        .is_ok());

    let err = service
        .update(&hr, &a.id, update_payload("Ana", "ben@corp.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn manager_cycle_is_rejected() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let a = seed_employee(&pool, "Ana", "Top", "ana@corp.test", None).await;
    let b = seed_employee(&pool, "Ben", "Mid", "ben@corp.test", Some(&a.id)).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    // A manages B; pointing A at B would close the loop
    let mut payload = update_payload("Ana", "ana@corp.test");
    payload.manager_id = Some(b.id.clone());
    let err = service.update(&hr, &a.id, payload).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // Self-management is the one-hop cycle
    let mut payload = update_payload("Ben", "ben@corp.test");
    payload.manager_id = Some(b.id.clone());
    let err = service.update(&hr, &b.id, payload).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn unresolvable_manager_id_on_update_leaves_manager_unchanged() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let boss = seed_employee(&pool, "Mara", "Boss", "mara@corp.test", None).await;
    let report = seed_employee(&pool, "Rene", "Report", "rene@corp.test", Some(&boss.id)).await;
    let hr = seed_user(&pool, "hr.user", Role::Hr, None).await;

    let mut payload = update_payload("Rene", "rene@corp.test");
    payload.manager_id = Some("no-such-manager".to_string());
    let updated = service.update(&hr, &report.id, payload).await.unwrap();

    assert_eq!(updated.manager_id.as_deref(), Some(boss.id.as_str()));
}

#[tokio::test]
async fn delete_cascades_team_membership_and_user_account() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());
    let teams = TeamRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());
    let employees = EmployeeRepository::new(pool.clone());

    let emp = seed_employee(&pool, "Gone", "Soon", "gone@corp.test", None).await;
    let team = seed_team(&pool, "Platform", None).await;
    teams.add_member(&team.id, &emp.id).await.unwrap();
    seed_user(&pool, "gone.soon", Role::Employee, Some(&emp.id)).await;

    assert!(service.delete(&emp.id).await.unwrap());

    assert!(teams.member_ids(&team.id).await.unwrap().is_empty());
    assert!(users.find_by_username("gone.soon").await.unwrap().is_none());
    assert!(employees.find_by_id(&emp.id).await.unwrap().is_none());

    // Idempotent report: a second delete finds nothing
    assert!(!service.delete(&emp.id).await.unwrap());
}

#[tokio::test]
async fn own_profile_update_requires_linked_employee() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());

    let unlinked = seed_user(&pool, "admin.only", Role::Admin, None).await;

    let payload = OwnProfileUpdate {
        first_name: "Ad".to_string(),
        last_name: "Min".to_string(),
        email: "admin@corp.test".to_string(),
        position: None,
        department: None,
        team_ids: None,
    };
    let err = service.update_own_profile(&unlinked, payload).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn own_profile_update_replaces_fields_and_recomputes_teams() {
    let pool = test_pool().await;
    let service = EmployeeService::new(pool.clone());
    let teams = TeamRepository::new(pool.clone());

    let emp = seed_employee(&pool, "Selma", "Own", "selma@corp.test", None).await;
    let t1 = seed_team(&pool, "Platform", None).await;
    let t2 = seed_team(&pool, "Tooling", None).await;
    teams.add_member(&t1.id, &emp.id).await.unwrap();
    let caller = seed_user(&pool, "selma.own", Role::Employee, Some(&emp.id)).await;

    let payload = OwnProfileUpdate {
        first_name: "Selma".to_string(),
        last_name: "Owned".to_string(),
        email: "selma.new@corp.test".to_string(),
        position: Some("Senior Engineer".to_string()),
        department: None,
        team_ids: Some(vec![t2.id.clone()]),
    };
    let updated = service.update_own_profile(&caller, payload).await.unwrap();

    assert_eq!(updated.last_name, "Owned");
    assert_eq!(updated.email, "selma.new@corp.test");
    assert_eq!(updated.position, "Senior Engineer");
    assert_eq!(updated.department, "Engineering");

    assert!(teams.member_ids(&t1.id).await.unwrap().is_empty());
    assert!(teams.member_ids(&t2.id).await.unwrap().contains(&emp.id));
}
