//! Output base-name derivation.
//!
//! A base name ties every artifact of one dump invocation together:
//! `<temp>/{base}.dmp`, `<temp>/{base}.zip` and the final `{base}.zip`.
//! It is computed once per invocation and reused, so all three always agree.
//!
//! Known limitation: the timestamp has second precision, so two invocations
//! for the same process by the same user within the same clock second
//! produce the same name.

use chrono::{DateTime, Local};
use tracing::warn;

/// Timestamp pattern with second precision. Lexically sortable.
const TIMESTAMP_FORMAT: &str = "%Y.%m.%d_%H.%M.%S";

/// Derive the base name for a dump invocation happening now.
pub fn base_name(process_name: &str, acting_user: &str) -> String {
    base_name_at(process_name, acting_user, Local::now())
}

/// Derive the base name for a dump invocation at an explicit instant.
///
/// Pure; `base_name` delegates here with the current wall-clock time.
pub fn base_name_at(process_name: &str, acting_user: &str, at: DateTime<Local>) -> String {
    format!(
        "{}_{}_{}",
        process_name,
        sanitize_user(acting_user),
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Replace path separators in a user identity with hyphens.
///
/// Domain-qualified identities (`DOMAIN\user`) would otherwise split the
/// artifact name across directories.
fn sanitize_user(user: &str) -> String {
    user.replace(['/', '\\'], "-")
}

/// The identity invoking the dump, for use in artifact names.
pub fn acting_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| {
            warn!(
                event = "core.naming.user_env_missing",
                "$USER and $USERNAME not set, falling back to 'unknown'"
            );
            "unknown".to_string()
        })
}
