// Classification of raw systemctl text onto symbolic states

use crate::systemd::models::{ActiveState, EnablementState, ServiceRecord};

/// Whether systemd recognizes the unit at all.
///
/// Returns false iff the status text is exactly the systemctl not-found
/// sentinel for this unit, trailing newline included. Anything else, near
/// misses included, counts as existing. The `.service` suffix in the
/// sentinel is a known limitation for other unit types.
pub fn classify_existence(status_text: &str, name: &str) -> bool {
    status_text != format!("Unit {}.service could not be found.\n", name)
}

/// Exact-match classification of `systemctl is-active` output.
///
/// The vocabulary is a small closed set, so matching is whole-string rather
/// than prefix: unrecognized text (a future systemd state, an error, empty
/// output from a failed spawn) must degrade to `Unknown` instead of being
/// guessed at. The anomaly goes to the operator log, never to the client.
pub fn classify_active(active_text: &str, name: &str) -> ActiveState {
    match active_text {
        "active\n" => ActiveState::Active,
        "inactive\n" => ActiveState::Inactive,
        other => {
            tracing::warn!("Unexpected is-active output for {}: {:?}", name, other);
            ActiveState::Unknown
        }
    }
}

/// Exact-match classification of `systemctl is-enabled` output.
pub fn classify_enablement(enabled_text: &str) -> EnablementState {
    match enabled_text {
        "enabled\n" => EnablementState::Enabled,
        "disabled\n" => EnablementState::Disabled,
        "masked\n" => EnablementState::Masked,
        "static\n" => EnablementState::Static,
        "alias\n" => EnablementState::Alias,
        "indirect\n" => EnablementState::Indirect,
        "enabled-runtime\n" => EnablementState::EnabledRuntime,
        _ => EnablementState::UnknownEnablement,
    }
}

/// Compose one record from the three raw probe answers.
///
/// A unit systemd does not recognize is forced to `NotApplicable`; its
/// is-active and is-enabled text is meaningless and is discarded without
/// classification, so nonexistent units never produce anomaly log lines.
pub fn build_record(
    name: &str,
    status_text: &str,
    active_text: &str,
    enabled_text: &str,
) -> ServiceRecord {
    if !classify_existence(status_text, name) {
        return ServiceRecord {
            name: name.to_string(),
            exists: false,
            active: ActiveState::Unknown,
            enablement: EnablementState::NotApplicable,
        };
    }

    ServiceRecord {
        name: name.to_string(),
        exists: true,
        active: classify_active(active_text, name),
        enablement: classify_enablement(enabled_text),
    }
}
