#[cfg(test)]
mod tests {
    use crate::config::PageChrome;
    use crate::error::Result;
    use crate::systemd::{snapshot, ActiveState, EnablementState, ScriptedProbe, ServiceRecord, UnitCatalog};
    use crate::web::render::{page, render_table};

    fn record(name: &str, active: ActiveState, enablement: EnablementState) -> ServiceRecord {
        ServiceRecord {
            name: name.to_string(),
            exists: true,
            active,
            enablement,
        }
    }

    fn missing(name: &str) -> ServiceRecord {
        ServiceRecord {
            name: name.to_string(),
            exists: false,
            active: ActiveState::Unknown,
            enablement: EnablementState::NotApplicable,
        }
    }

    fn data_rows(table: &str) -> usize {
        // Every row closes its tag; the header is the one extra
        table.matches("</tr>").count() - 1
    }

    #[test]
    fn test_table_has_one_row_per_record() {
        let records = vec![
            record("cron", ActiveState::Active, EnablementState::Enabled),
            record("ssh", ActiveState::Inactive, EnablementState::Disabled),
            missing("ghost"),
        ];

        let table = render_table(&records);
        assert_eq!(data_rows(&table), 3);

        let empty = render_table(&[]);
        assert_eq!(data_rows(&empty), 0);
        assert!(empty.contains("<th><b>Service</b></th>"));
    }

    #[test]
    fn test_active_enabled_row_symbols() {
        let table = render_table(&[record("cron", ActiveState::Active, EnablementState::Enabled)]);

        assert!(table.contains("<td>cron</td>"));
        assert!(table.contains("<td>&#128994</td>"));
        assert!(table.contains("<td>Enabled &#9989</td>"));
    }

    #[test]
    fn test_missing_unit_row_is_not_applicable() {
        let table = render_table(&[missing("ghost")]);

        assert!(table.contains("<td>Unit ghost could not be found</td>"));
        assert_eq!(table.matches("<td>N/A</td>").count(), 2);
    }

    #[test]
    fn test_every_enablement_label_renders() {
        let states = [
            (EnablementState::Enabled, "Enabled &#9989"),
            (EnablementState::Disabled, "Disabled &#10060"),
            (EnablementState::Masked, "Masked &#127917"),
            (EnablementState::Static, "Static &#9940"),
            (EnablementState::Alias, "Alias &#128195&#8594&#128196"),
            (EnablementState::Indirect, "Indirect &#8669"),
            (EnablementState::EnabledRuntime, "Enabled Runtime &#127939&#9201"),
            (EnablementState::UnknownEnablement, "Unknown&#10067"),
        ];

        for (state, label) in states {
            let table = render_table(&[record("unit", ActiveState::Active, state)]);
            assert!(table.contains(&format!("<td>{}</td>", label)), "for {:?}", state);
        }
    }

    #[test]
    fn test_unknown_active_state_renders_question_mark() {
        let table = render_table(&[record("flaky", ActiveState::Unknown, EnablementState::Disabled)]);
        assert!(table.contains("<td>&#10067</td>"));
    }

    #[test]
    fn test_page_assembly() {
        let chrome = PageChrome {
            start: "<html><body>".to_string(),
            end: "</body></html>".to_string(),
        };

        let body = page(&chrome, &[record("cron", ActiveState::Active, EnablementState::Enabled)]);

        assert!(body.starts_with("<html><body>"));
        assert!(body.ends_with("</body></html>"));
        assert!(body.contains("id=\"keyTable\""));
        assert!(body.contains("function toggleKeyTable()"));
        assert!(body.contains("id=\"tableInput\""));
        assert!(body.contains("function tableFunction()"));
        assert!(body.contains("<table id=\"table\">"));
    }

    #[test]
    fn test_pipeline_is_idempotent() -> Result<()> {
        // Identical probe answers must yield byte-identical markup
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("cron"), "[Unit]\n")?;
        std::fs::write(dir.path().join("ghost"), "[Unit]\n")?;
        let catalog = UnitCatalog::new(dir.path());

        let probe = ScriptedProbe::default()
            .with("cron", "* cron.service - cron daemon\n", "active\n", "enabled\n")
            .with("ghost", "Unit ghost.service could not be found.\n", "", "");

        let chrome = PageChrome {
            start: "<html>".to_string(),
            end: "</html>".to_string(),
        };

        let first = page(&chrome, &snapshot(&catalog, &probe)?);
        let second = page(&chrome, &snapshot(&catalog, &probe)?);
        assert_eq!(first, second);
        Ok(())
    }
}
