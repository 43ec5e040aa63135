// Systemctl invocation layer

use std::process::Command;

/// Query capability over the init subsystem for a single unit name.
///
/// Implementations only forward raw text; classification happens in
/// `classify`. The three queries are independent of each other and never
/// short-circuit: callers issue all three per unit.
#[cfg_attr(test, mockall::automock)]
pub trait UnitProbe: Send + Sync {
    /// Combined output of `systemctl status <name>`.
    fn status(&self, name: &str) -> String;

    /// Combined output of `systemctl is-active <name>`.
    fn is_active(&self, name: &str) -> String;

    /// Combined output of `systemctl is-enabled <name>`.
    fn is_enabled(&self, name: &str) -> String;
}

/// Probe backed by the real `systemctl` binary.
pub struct SystemctlProbe;

impl SystemctlProbe {
    /// Run one systemctl subcommand and capture stdout followed by stderr.
    ///
    /// The not-found message arrives on stderr, so both streams are needed
    /// for the existence sentinel to be visible. A spawn failure (systemctl
    /// missing, fork pressure) is captured as empty text, never an error;
    /// the classifier degrades empty text to its unknown states.
    fn run(&self, subcommand: &str, name: &str) -> String {
        match Command::new("systemctl").arg(subcommand).arg(name).output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                text
            }
            Err(e) => {
                tracing::warn!("Failed to run systemctl {} {}: {}", subcommand, name, e);
                String::new()
            }
        }
    }
}

impl UnitProbe for SystemctlProbe {
    fn status(&self, name: &str) -> String {
        self.run("status", name)
    }

    fn is_active(&self, name: &str) -> String {
        self.run("is-active", name)
    }

    fn is_enabled(&self, name: &str) -> String {
        self.run("is-enabled", name)
    }
}

/// In-memory probe returning scripted text, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedProbe {
    replies: std::collections::HashMap<String, (String, String, String)>,
}

#[cfg(test)]
impl ScriptedProbe {
    /// Script the three raw answers for one unit name.
    pub fn with(mut self, name: &str, status: &str, active: &str, enabled: &str) -> Self {
        self.replies.insert(
            name.to_string(),
            (status.to_string(), active.to_string(), enabled.to_string()),
        );
        self
    }
}

#[cfg(test)]
impl UnitProbe for ScriptedProbe {
    fn status(&self, name: &str) -> String {
        self.replies.get(name).map(|r| r.0.clone()).unwrap_or_default()
    }

    fn is_active(&self, name: &str) -> String {
        self.replies.get(name).map(|r| r.1.clone()).unwrap_or_default()
    }

    fn is_enabled(&self, name: &str) -> String {
        self.replies.get(name).map(|r| r.2.clone()).unwrap_or_default()
    }
}
