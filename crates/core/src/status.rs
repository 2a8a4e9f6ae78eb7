//! Lifecycle status constants for companies, drives and applications.
//!
//! These must match the CHECK constraints in the corresponding
//! `create_*_table.sql` migrations. Statuses are stored as plain text
//! so the admin screens can render them without a lookup table.

// Company registrations start pending and are approved or rejected by
// an admin.
pub const APPROVAL_PENDING: &str = "pending";
pub const APPROVAL_APPROVED: &str = "approved";
pub const APPROVAL_REJECTED: &str = "rejected";

// Drives start pending, go live on admin approval and stop accepting
// applications once closed or rejected.
pub const DRIVE_PENDING: &str = "pending";
pub const DRIVE_APPROVED: &str = "approved";
pub const DRIVE_CLOSED: &str = "closed";
pub const DRIVE_REJECTED: &str = "rejected";

// Applications are created as "applied" and moved through the hiring
// funnel by the company that owns the drive.
pub const APPLICATION_APPLIED: &str = "applied";
pub const APPLICATION_SHORTLISTED: &str = "shortlisted";
pub const APPLICATION_SELECTED: &str = "selected";
pub const APPLICATION_REJECTED: &str = "rejected";

/// Every status an application row may carry.
pub const APPLICATION_STATUSES: [&str; 4] = [
    APPLICATION_APPLIED,
    APPLICATION_SHORTLISTED,
    APPLICATION_SELECTED,
    APPLICATION_REJECTED,
];

/// Returns true if `status` is one of the recognised application
/// statuses. Status updates carrying anything else are ignored rather
/// than rejected.
pub fn is_application_status(status: &str) -> bool {
    APPLICATION_STATUSES.contains(&status)
}
