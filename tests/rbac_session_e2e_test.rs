//! End-to-end test of the RBAC session workflow
//!
//! Drives a session the way the console does: load a snapshot, run access
//! checks, change roles, grant an emergency override, then inspect the live
//! queue and audit trail.

use anyhow::Result;
use crewdeck_rbac::{
    EmployeeId, EventOrder, RbacConfig, RbacError, RbacSession, UnifiedEmployee,
    ValidationEventType, ValidationOutcome,
};

fn crew_snapshot() -> Vec<UnifiedEmployee> {
    vec![
        UnifiedEmployee::new("101", "Lee Fox", "lee.fox@crewdeck.example", "user"),
        UnifiedEmployee::new("102", "Dana Ortiz", "dana.ortiz@crewdeck.example", "supervisor"),
        UnifiedEmployee::new("103", "Mina Patel", "mina.patel@crewdeck.example", "hr"),
        UnifiedEmployee::new("104", "Sam Reyes", "sam.reyes@crewdeck.example", "admin"),
        UnifiedEmployee::new("105", "Pat Doyle", "pat.doyle@crewdeck.example", "superadmin"),
    ]
}

fn session() -> RbacSession {
    RbacSession::with_snapshot(&RbacConfig::default(), crew_snapshot()).unwrap()
}

#[test]
fn test_full_console_session_workflow() -> Result<()> {
    let mut session = session();

    // Session start is itself an audited event
    assert_eq!(session.audit_log().len(), 1);
    assert_eq!(
        session.audit_log().newest().unwrap().event_type,
        ValidationEventType::SystemAccess
    );

    // A field worker can use self-service but not payroll management
    let ok = session.validate_access(&EmployeeId::new("101"), "self_service")?;
    assert!(ok.granted);

    let denied = session.validate_access(&EmployeeId::new("101"), "payroll_manage")?;
    assert!(!denied.granted);
    assert_eq!(denied.required_roles, vec!["admin".to_string()]);

    // Promotion by the superadmin, then the same check passes
    session.set_employee_role(&EmployeeId::new("105"), &EmployeeId::new("101"), "admin")?;
    let after = session.validate_access(&EmployeeId::new("101"), "payroll_manage")?;
    assert!(after.granted);

    // Emergency override for someone who stays denied
    let forced = session.grant_emergency_override(
        &EmployeeId::new("102"),
        "system_settings",
        "generator failure, site-wide lockout",
    )?;
    assert!(forced.granted);
    let recheck = session.validate_access(&EmployeeId::new("102"), "system_settings")?;
    assert!(!recheck.granted);

    // Every operation above landed in the audit trail in order
    let events = session.audit_log().list(None, EventOrder::OldestFirst);
    let types: Vec<ValidationEventType> = events.iter().map(|e| e.event_type).collect();
    assert_eq!(
        types,
        vec![
            ValidationEventType::SystemAccess,
            ValidationEventType::PermissionCheck,
            ValidationEventType::PermissionCheck,
            ValidationEventType::RoleChange,
            ValidationEventType::PermissionCheck,
            ValidationEventType::EmergencyOverride,
            ValidationEventType::PermissionCheck,
        ]
    );

    Ok(())
}

#[test]
fn test_level_one_user_denied_system_settings() -> Result<()> {
    let mut session = session();

    let decision = session.validate_access(&EmployeeId::new("101"), "system_settings")?;
    assert!(!decision.granted);
    assert_eq!(decision.role, "user");
    assert_eq!(decision.required_roles, vec!["superadmin".to_string()]);

    let event = session.audit_log().newest().unwrap();
    assert_eq!(event.event_type, ValidationEventType::PermissionCheck);
    assert_eq!(event.result, ValidationOutcome::Denied);
    assert_eq!(event.user, "Lee Fox");

    Ok(())
}

#[test]
fn test_unknown_feature_fails_closed_except_wildcard() -> Result<()> {
    let mut session = session();

    let admin = session.validate_access(&EmployeeId::new("104"), "crane_telemetry")?;
    assert!(!admin.granted);
    assert!(admin.required_roles.is_empty());

    let superadmin = session.validate_access(&EmployeeId::new("105"), "crane_telemetry")?;
    assert!(superadmin.granted);

    Ok(())
}

#[test]
fn test_role_mutation_guardrails() {
    let mut session = session();

    // Admin holds broad permissions but not the wildcard
    let err = session
        .set_employee_role(&EmployeeId::new("104"), &EmployeeId::new("101"), "hr")
        .unwrap_err();
    assert!(err.is_forbidden());
    assert_eq!(session.employee(&EmployeeId::new("101")).unwrap().role, "user");

    let err = session
        .set_employee_role(&EmployeeId::new("105"), &EmployeeId::new("101"), "foreman")
        .unwrap_err();
    assert!(matches!(err, RbacError::UnknownRole { .. }));

    let err = session
        .set_employee_role(&EmployeeId::new("999"), &EmployeeId::new("101"), "hr")
        .unwrap_err();
    assert!(err.is_not_found());

    // Guardrail failures leave no trace in the logs
    let changes = session
        .audit_log()
        .list(Some(ValidationEventType::RoleChange), EventOrder::NewestFirst);
    assert!(changes.is_empty());
}

#[test]
fn test_bulk_role_update_is_per_unit() -> Result<()> {
    let mut session = session();

    let results = session.set_employee_roles_bulk(
        &EmployeeId::new("105"),
        &[EmployeeId::new("101"), EmployeeId::new("999"), EmployeeId::new("103")],
        "supervisor",
    );

    assert_eq!(results.len(), 3);
    assert!(results[0].succeeded());
    assert!(!results[1].succeeded());
    assert!(results[2].succeeded());

    assert_eq!(session.employee(&EmployeeId::new("101")).unwrap().role, "supervisor");
    assert_eq!(session.employee(&EmployeeId::new("103")).unwrap().role, "supervisor");

    let changes = session
        .audit_log()
        .list(Some(ValidationEventType::RoleChange), EventOrder::NewestFirst);
    assert_eq!(changes.len(), 2);

    Ok(())
}

#[test]
fn test_override_without_reason_rejected() {
    let mut session = session();
    let before = session.audit_log().len();

    let err = session
        .grant_emergency_override(&EmployeeId::new("101"), "system_settings", "  ")
        .unwrap_err();
    assert!(matches!(err, RbacError::MissingJustification));
    assert_eq!(session.audit_log().len(), before);
}

#[test]
fn test_live_queue_keeps_ten_audit_keeps_fifty() -> Result<()> {
    let mut session = session();

    for _ in 0..60 {
        session.validate_access(&EmployeeId::new("101"), "self_service")?;
    }

    assert_eq!(session.live_queue().len(), 10);
    assert_eq!(session.audit_log().len(), 50);

    // Both logs agree on the newest entry
    assert_eq!(
        session.live_queue().newest().unwrap().action,
        session.audit_log().newest().unwrap().action
    );

    // Live queue holds exactly the ten most recent checks, newest first
    let live = session.live_queue().list(None, EventOrder::NewestFirst);
    assert!(live
        .iter()
        .all(|e| e.event_type == ValidationEventType::PermissionCheck));
    let ids: Vec<u64> = live.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);

    Ok(())
}

#[test]
fn test_clearing_logs_is_independent() -> Result<()> {
    let mut session = session();
    session.validate_access(&EmployeeId::new("102"), "attendance_view")?;

    session.clear_live_queue();
    assert!(session.live_queue().is_empty());
    assert_eq!(session.audit_log().len(), 2);

    // New events keep flowing into both after a clear
    session.validate_access(&EmployeeId::new("102"), "incident_management")?;
    assert_eq!(session.live_queue().len(), 1);
    assert_eq!(session.audit_log().len(), 3);

    Ok(())
}

#[test]
fn test_decision_and_event_serialize_camel_case() -> Result<()> {
    let mut session = session();
    let decision = session.validate_access(&EmployeeId::new("102"), "attendance_view")?;

    let json = serde_json::to_value(&decision)?;
    assert_eq!(json["subjectName"], "Dana Ortiz");
    assert_eq!(json["requiredRoles"][0], "supervisor");
    assert_eq!(json["granted"], true);

    let event = serde_json::to_value(session.audit_log().newest().unwrap())?;
    assert_eq!(event["eventType"], "permission_check");
    assert_eq!(event["result"], "granted");

    Ok(())
}
