// src/presentation.rs
use std::io::{self, Write};

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use muembed_domain::guard::SkipReason;
use muembed_usecase::{AssemblyOutput, TargetReport};

use crate::config::{AssembleConfig, Mode, ReportFormat};

pub fn print_results(output: &AssemblyOutput, config: &AssembleConfig) -> anyhow::Result<()> {
    match config.mode {
        Mode::Assemble => {
            if !config.quiet {
                write_assemble_summary(&mut io::stderr().lock(), output, config.to_stdout)?;
            }
        }
        Mode::Check => write_check_summary(&mut io::stdout().lock(), output)?,
        Mode::Plan => match config.report_format {
            ReportFormat::Table => writeln!(io::stdout().lock(), "{}", plan_table(output))?,
            ReportFormat::Json => writeln!(io::stdout().lock(), "{}", serde_json::to_string_pretty(output)?)?,
        },
    }
    Ok(())
}

fn write_assemble_summary(out: &mut impl Write, output: &AssemblyOutput, to_stdout: bool) -> io::Result<()> {
    for target in &output.targets {
        let destination =
            if to_stdout { "<stdout>".to_string() } else { target.output.display().to_string() };
        writeln!(
            out,
            "[muembed] {} -> {destination} ({} bytes, {} modules, {} skipped)",
            target.name,
            target.bytes,
            target.emitted.len(),
            target.skipped.len()
        )?;
    }
    Ok(())
}

fn write_check_summary(out: &mut impl Write, output: &AssemblyOutput) -> io::Result<()> {
    for target in &output.targets {
        let status = match target.mismatches.len() {
            0 if target.mismatch_skips() > 0 => "ok (mismatches suppressed)".to_string(),
            0 => "ok".to_string(),
            n => format!("{n} version mismatch(es)"),
        };
        writeln!(out, "{}: {status}", target.name)?;
    }
    writeln!(
        out,
        "checked {} target(s), {} version mismatch(es)",
        output.targets.len(),
        output.mismatch_count()
    )
}

fn plan_table(output: &AssemblyOutput) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["TARGET", "MODULE", "VERSION", "STATUS", "NOTE"]);

    for target in &output.targets {
        for row in plan_rows(target) {
            table.add_row(row);
        }
    }
    table
}

fn plan_rows(target: &TargetReport) -> Vec<[String; 5]> {
    let emitted = target.emitted.iter().map(|m| {
        [target.name.clone(), m.guard.to_string(), m.version.to_string(), "embed".to_string(), String::new()]
    });

    let skipped = target.skipped.iter().map(|s| {
        let status = match s.reason {
            SkipReason::AlreadySatisfied => "skip",
            SkipReason::VersionMismatch => "skip (mismatch)",
        };
        let mut note = format!("{} already embedded", s.previous);
        if let Some(by) = &s.requested_by {
            note.push_str(&format!(", requested by {by}"));
        }
        [target.name.clone(), s.symbol.to_string(), s.version.to_string(), status.to_string(), note]
    });

    emitted.chain(skipped).collect()
}
