//! RBAC session
//!
//! Owns the in-memory employee working set plus the two bounded event logs
//! (live queue and audit trail) for one active principal. Every operation
//! runs to completion synchronously; a failed mutation leaves both the
//! working set and the logs untouched.

use std::collections::HashMap;

use crewdeck_api_types::{
    EmployeeId, UnifiedEmployee, ValidationEventType, ValidationOutcome,
};

use crate::config::RbacConfig;
use crate::error::{RbacError, RbacResult};
use crate::events::ValidationEventLog;
use crate::validator::{AccessDecision, AccessValidator};

/// Per-target outcome of a bulk role update
#[derive(Debug)]
pub struct BulkRoleChange {
    pub target_id: EmployeeId,
    pub outcome: RbacResult<()>,
}

impl BulkRoleChange {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Single-principal RBAC session
///
/// The catalog and feature table are fixed for the session's lifetime; the
/// employee working set is live-patched by role changes and never written
/// back to the directory.
#[derive(Debug)]
pub struct RbacSession {
    validator: AccessValidator,
    employees: HashMap<EmployeeId, UnifiedEmployee>,
    live_queue: ValidationEventLog,
    audit_log: ValidationEventLog,
}

impl RbacSession {
    /// Start a session with an empty working set
    ///
    /// Builds and validates the catalog and feature table; employees arrive
    /// later via [`with_snapshot`](Self::with_snapshot).
    pub fn new(config: &RbacConfig) -> RbacResult<Self> {
        Ok(Self {
            validator: AccessValidator::from_config(config)?,
            employees: HashMap::new(),
            live_queue: ValidationEventLog::with_capacity(config.live_queue_capacity),
            audit_log: ValidationEventLog::with_capacity(config.audit_log_capacity),
        })
    }

    /// Start a session from configuration and a directory snapshot
    ///
    /// Takes ownership of the employee snapshot and records a
    /// `system_access` event marking session start.
    pub fn with_snapshot(
        config: &RbacConfig,
        snapshot: Vec<UnifiedEmployee>,
    ) -> RbacResult<Self> {
        let mut session = Self::new(config)?;
        let count = snapshot.len();
        session.employees = snapshot.into_iter().map(|e| (e.id.clone(), e)).collect();

        session.record(
            ValidationEventType::SystemAccess,
            "system",
            format!("Session initialized with {} employees", count),
            ValidationOutcome::Completed,
            None,
        );

        Ok(session)
    }

    /// Check whether a subject may use a feature, recording the outcome
    ///
    /// Unknown subjects fail with `SubjectNotFound` and leave the logs
    /// untouched; known subjects always produce a `permission_check` event,
    /// granted or denied.
    pub fn validate_access(
        &mut self,
        subject_id: &EmployeeId,
        feature: &str,
    ) -> RbacResult<AccessDecision> {
        let employee = self.require_employee(subject_id)?;
        let decision = self.validator.decide(employee, feature);

        let result = if decision.granted {
            ValidationOutcome::Granted
        } else {
            tracing::debug!(subject = %decision.subject_id, feature, "access denied");
            ValidationOutcome::Denied
        };
        self.record(
            ValidationEventType::PermissionCheck,
            decision.subject_name.clone(),
            format!("requested feature '{}'", feature),
            result,
            None,
        );

        Ok(decision)
    }

    /// Force a grant for one request, without touching permission data
    ///
    /// The justification is mandatory; a blank reason fails with
    /// `MissingJustification` and produces no event. The override is a
    /// logged exception, so a later `validate_access` for the same pair
    /// evaluates from the tables as if the override never happened.
    pub fn grant_emergency_override(
        &mut self,
        subject_id: &EmployeeId,
        feature: &str,
        reason: &str,
    ) -> RbacResult<AccessDecision> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(RbacError::MissingJustification);
        }

        let employee = self.require_employee(subject_id)?;
        let mut decision = self.validator.decide(employee, feature);
        decision.granted = true;

        tracing::warn!(
            subject = %decision.subject_id,
            feature,
            "emergency override granted"
        );
        self.record(
            ValidationEventType::EmergencyOverride,
            decision.subject_name.clone(),
            format!("override for '{}'", feature),
            ValidationOutcome::Granted,
            Some(reason.to_string()),
        );

        Ok(decision)
    }

    /// Reassign a target employee's role, recording the change
    ///
    /// Only actors holding the wildcard permission may change roles. The
    /// new role must exist in the catalog. Re-assigning the current role is
    /// permitted and still recorded.
    pub fn set_employee_role(
        &mut self,
        actor_id: &EmployeeId,
        target_id: &EmployeeId,
        new_role: &str,
    ) -> RbacResult<()> {
        let actor = self.require_employee(actor_id)?;
        let actor_name = actor.full_name.clone();
        if !self.validator.catalog().role_has_wildcard(&actor.role) {
            return Err(RbacError::forbidden(actor_name, "role_management"));
        }

        self.validator.catalog().require(new_role)?;

        let target = self
            .employees
            .get_mut(target_id)
            .ok_or_else(|| RbacError::subject_not_found(target_id.clone()))?;

        let old_role = std::mem::replace(&mut target.role, new_role.to_string());
        let target_name = target.full_name.clone();

        let action = format!(
            "Role changed from '{}' to '{}'",
            self.validator.catalog().label_for(&old_role),
            self.validator.catalog().label_for(new_role)
        );
        self.record(
            ValidationEventType::RoleChange,
            target_name,
            action,
            ValidationOutcome::Completed,
            Some(format!("changed by {}", actor_name)),
        );

        Ok(())
    }

    /// Assign one role to many targets, one result per target
    ///
    /// Sequential application of the single-target operation, not atomic as
    /// a batch; a failed unit leaves its target unchanged and never aborts
    /// the rest.
    pub fn set_employee_roles_bulk(
        &mut self,
        actor_id: &EmployeeId,
        target_ids: &[EmployeeId],
        new_role: &str,
    ) -> Vec<BulkRoleChange> {
        target_ids
            .iter()
            .map(|target_id| BulkRoleChange {
                target_id: target_id.clone(),
                outcome: self.set_employee_role(actor_id, target_id, new_role),
            })
            .collect()
    }

    /// Look up an employee in the working set
    pub fn employee(&self, id: &EmployeeId) -> Option<&UnifiedEmployee> {
        self.employees.get(id)
    }

    /// Working-set employees, ordered by ID for stable display
    pub fn employees(&self) -> Vec<&UnifiedEmployee> {
        let mut employees: Vec<&UnifiedEmployee> = self.employees.values().collect();
        employees.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        employees
    }

    pub fn validator(&self) -> &AccessValidator {
        &self.validator
    }

    pub fn live_queue(&self) -> &ValidationEventLog {
        &self.live_queue
    }

    pub fn audit_log(&self) -> &ValidationEventLog {
        &self.audit_log
    }

    /// Drop every live-queue entry
    pub fn clear_live_queue(&mut self) {
        self.live_queue.clear();
    }

    /// Drop every audit-trail entry
    pub fn clear_audit_log(&mut self) {
        self.audit_log.clear();
    }

    fn require_employee(&self, id: &EmployeeId) -> RbacResult<&UnifiedEmployee> {
        self.employees
            .get(id)
            .ok_or_else(|| RbacError::subject_not_found(id.clone()))
    }

    fn record(
        &mut self,
        event_type: ValidationEventType,
        user: impl Into<String>,
        action: impl Into<String>,
        result: ValidationOutcome,
        details: Option<String>,
    ) {
        let user = user.into();
        let action = action.into();
        self.live_queue
            .append(event_type, user.clone(), action.clone(), result, details.clone());
        self.audit_log.append(event_type, user, action, result, details);
    }
}
