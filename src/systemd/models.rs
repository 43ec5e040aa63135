// Service status data models

use serde::{Deserialize, Serialize};

/// Live run-state of a unit as answered by `systemctl is-active`.
///
/// `Unknown` covers every answer outside the documented vocabulary and is
/// reached only for units systemd recognizes; it is an operator-log anomaly,
/// not a user-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveState {
    Active,
    Inactive,
    Unknown,
}

impl ActiveState {
    /// HTML entity shown in the Status column.
    pub fn symbol(&self) -> &'static str {
        match self {
            ActiveState::Active => "&#128994",
            ActiveState::Inactive => "&#128308",
            ActiveState::Unknown => "&#10067",
        }
    }
}

/// Boot-enablement policy of a unit as answered by `systemctl is-enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnablementState {
    Enabled,
    Disabled,
    Masked,
    Static,
    Alias,
    Indirect,
    EnabledRuntime,
    UnknownEnablement,
    /// Forced when the unit does not exist; never produced by classification.
    NotApplicable,
}

impl EnablementState {
    /// Label and HTML entity shown in the Enabled-on-boot column.
    pub fn label(&self) -> &'static str {
        match self {
            EnablementState::Enabled => "Enabled &#9989",
            EnablementState::Disabled => "Disabled &#10060",
            EnablementState::Masked => "Masked &#127917",
            EnablementState::Static => "Static &#9940",
            EnablementState::Alias => "Alias &#128195&#8594&#128196",
            EnablementState::Indirect => "Indirect &#8669",
            EnablementState::EnabledRuntime => "Enabled Runtime &#127939&#9201",
            EnablementState::UnknownEnablement => "Unknown&#10067",
            EnablementState::NotApplicable => "N/A",
        }
    }
}

/// One row of the status board: a unit and its classified states.
///
/// Built once per request per discovered unit, immutable afterwards.
/// Invariant: `exists == false` forces `enablement == NotApplicable`, and
/// `active` is not meaningful (both status columns render "N/A").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub exists: bool,
    pub active: ActiveState,
    pub enablement: EnablementState,
}
