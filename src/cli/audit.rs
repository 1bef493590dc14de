//! CLI command for inspecting the audit log
//!
//! Prints the most recent audit entries in a human-readable form.

use crate::audit::AuditLogger;
use crate::error::TallyResult;

/// Handle the `audit` command
pub fn handle_audit_command(audit: &AuditLogger, limit: usize) -> TallyResult<()> {
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!("Showing {} of {} entries.", entries.len(), audit.entry_count()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEntry;
    use tempfile::TempDir;

    #[test]
    fn test_audit_command_with_entries() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));
        audit.log(&AuditEntry::load(0)).unwrap();
        audit.log(&AuditEntry::save(1)).unwrap();

        handle_audit_command(&audit, 10).unwrap();
        handle_audit_command(&audit, 1).unwrap();
    }

    #[test]
    fn test_audit_command_with_missing_log() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));

        handle_audit_command(&audit, 10).unwrap();
    }
}
