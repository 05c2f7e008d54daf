use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Outcome of one scenario in one mode.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub name: String,
    /// `logic` or `browser:<kind>`.
    pub mode: String,
    pub passed: bool,
    pub failure: Option<String>,
    pub duration_ms: u128,
}

impl ScenarioResult {
    pub fn new(
        scenario: &str,
        name: &str,
        mode: impl Into<String>,
        outcome: &Result<()>,
        elapsed: Duration,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            name: name.to_string(),
            mode: mode.into(),
            passed: outcome.is_ok(),
            failure: outcome.as_ref().err().map(|e| format!("{e:#}")),
            duration_ms: elapsed.as_millis(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    total: usize,
    passed: usize,
    results: &'a [ScenarioResult],
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len().max(1) as f64) * 100.0
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Navigation Test Results".bright_cyan().bold())?;
    writeln!(out, "{}", "==========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total runs: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} [{}] {} ({} ms)",
            result.mode,
            result.name.bold(),
            result.duration_ms
        )?;
        if let Some(failure) = &result.failure {
            writeln!(out, "     • {}", failure.red())?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        total: results.len(),
        passed: results.iter().filter(|r| r.passed).count(),
        results,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# About Page Navigation Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total runs**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    writeln!(out, "| | Scenario | Mode | Time (ms) |")?;
    writeln!(out, "|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {status} | {} | {} | {} |",
            result.name, result.mode, result.duration_ms
        )?;
    }

    let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    if !failures.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failures {
            writeln!(
                out,
                "- **{}** ({}): {}",
                result.name,
                result.mode,
                result.failure.as_deref().unwrap_or("unknown")
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn sample(passed: bool) -> ScenarioResult {
        let outcome = if passed {
            Ok(())
        } else {
            Err(anyhow!("landed at 120 instead of 3000"))
        };
        ScenarioResult::new(
            "section-jumps",
            "Section buttons scroll to their sections",
            "browser:chrome",
            &outcome,
            Duration::from_millis(1300),
        )
    }

    #[test]
    fn result_captures_failure_chain() {
        let failed = sample(false);
        assert!(!failed.passed);
        assert_eq!(failed.failure.as_deref(), Some("landed at 120 instead of 3000"));
        assert_eq!(failed.duration_ms, 1300);
        assert!(sample(true).failure.is_none());
    }

    #[test]
    fn json_report_counts_passes() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[sample(true), sample(false)]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["passed"], 1);
        assert_eq!(value["results"][0]["scenario"], "section-jumps");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn markdown_report_lists_failures() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[sample(true), sample(false)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# About Page Navigation Results"));
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("## Failures"));
        assert!(text.contains("landed at 120 instead of 3000"));
    }

    #[test]
    fn console_report_handles_all_passing() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[sample(true)], Duration::from_secs(2)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("Success rate: 100.0%"));
        assert!(!text.contains('•'));
    }
}
