//! Rename preview rendering for the command line.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use renamepipe::operation::Operation;
use renamepipe::store::PreviewRow;

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

fn describe_pipeline(operations: &[Operation]) -> String {
    if operations.is_empty() {
        return "(empty)".to_string();
    }

    operations
        .iter()
        .map(|op| {
            if op.enabled {
                op.kind().to_string()
            } else {
                format!("{} (off)", op.kind())
            }
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Display the preview in a formatted listing
pub fn display_preview(
    rows: &[PreviewRow<'_>],
    operations: &[Operation],
    colors: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "            RENAME PREVIEW")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Pipeline: {}", describe_pipeline(operations))?;
    writeln!(writer, "Files:    {}", rows.len())?;
    writeln!(writer)?;

    if rows.is_empty() {
        writeln!(writer, "No files to rename.")?;
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        writeln!(writer, "  {}. {}", i + 1, row.original)?;

        if row.original == row.proposed {
            writeln!(writer, "     (unchanged)")?;
        } else if colors {
            writeln!(writer, "     {} {}", "->".cyan(), row.proposed)?;
        } else {
            writeln!(writer, "     -> {}", row.proposed)?;
        }

        if let Some(issue) = row.issue {
            if colors {
                writeln!(writer, "     {}", format!("[!] {}", issue).red())?;
            } else {
                writeln!(writer, "     [!] {}", issue)?;
            }
        }

        writeln!(writer)?;
    }

    let changed = rows.iter().filter(|r| r.original != r.proposed).count();
    let invalid = rows.iter().filter(|r| !r.is_valid).count();

    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(writer, "  {} files would be renamed", changed)?;
    if invalid > 0 {
        writeln!(writer, "  {} names are invalid", invalid)?;
    }

    Ok(())
}

/// Display the preview as tab-separated rows for scripting
pub fn display_preview_simple(rows: &[PreviewRow<'_>], writer: &mut impl Write) -> io::Result<()> {
    for row in rows {
        let status = match row.issue {
            Some(issue) => issue.code(),
            None => "ok",
        };
        writeln!(writer, "{}\t{}\t{}", row.original, row.proposed, status)?;
    }
    Ok(())
}
