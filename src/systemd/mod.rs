// Systemd integration module

pub mod catalog;
pub mod classify;
pub mod models;
pub mod probe;


pub use catalog::UnitCatalog;
pub use classify::{build_record, classify_active, classify_enablement, classify_existence};
pub use models::{ActiveState, EnablementState, ServiceRecord};
pub use probe::{SystemctlProbe, UnitProbe};

// Re-export for tests
#[cfg(test)]
pub use probe::{MockUnitProbe, ScriptedProbe};

/// Probe and classify every unit the catalog lists, in catalog order.
///
/// Strictly sequential: one unit at a time, three blocking systemctl calls
/// per unit in the fixed order status, is-active, is-enabled. All three
/// queries are issued even for units systemd turns out not to know; the
/// surplus answers are discarded by the record builder.
pub fn snapshot(catalog: &UnitCatalog, probe: &dyn UnitProbe) -> crate::error::Result<Vec<ServiceRecord>> {
    let mut records = Vec::new();
    for name in catalog.list_units()? {
        let status = probe.status(&name);
        let active = probe.is_active(&name);
        let enabled = probe.is_enabled(&name);
        records.push(build_record(&name, &status, &active, &enabled));
    }
    Ok(records)
}
