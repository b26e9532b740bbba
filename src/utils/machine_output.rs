use chrono::Utc;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
}

/// Emit the v1 machine-readable envelope on stdout.
pub fn emit_v1<T>(command: &str, data: T, warnings: Vec<String>, errors: Vec<String>) -> Result<()>
where
    T: Serialize,
{
    let envelope = MachineEnvelope {
        version: "v1".to_string(),
        command: command.to_string(),
        ok: errors.is_empty(),
        data,
        warnings,
        errors,
        meta: MachineMeta {
            generated_at: Utc::now().to_rfc3339(),
        },
    };

    let out = serde_json::to_string_pretty(&envelope)?;
    println!("{}", out);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_marks_failure_when_errors_present() {
        let envelope = MachineEnvelope {
            version: "v1".to_string(),
            command: "locate".to_string(),
            ok: false,
            data: serde_json::json!({}),
            warnings: vec![],
            errors: vec!["boom".to_string()],
            meta: MachineMeta {
                generated_at: "2026-01-01T00:00:00Z".to_string(),
            },
        };

        let out = serde_json::to_string(&envelope).unwrap();
        assert!(out.contains("\"ok\":false"));
        assert!(out.contains("\"version\":\"v1\""));
    }
}
