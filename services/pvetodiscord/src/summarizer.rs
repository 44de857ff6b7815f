//! Condenses a vzdump backup report into a fixed-width table
//!
//! The report is the mail body Proxmox VE attaches to backup jobs: a
//! `Details` table with one row per guest, a pair of totals, and the raw
//! task logs after a `Logs` heading. Only the first four columns of each row
//! (VMID, name, status, time) are kept.

const LOGS_MARKER: &str = "Logs";
const DETAILS_HEADING: &str = "Details";
const TABLE_HEADER_MARKER: &str = "VMID";
const RUNNING_TIME_PREFIX: &str = "Total running time:";
const TOTAL_SIZE_PREFIX: &str = "Total size:";

const COLUMN_COUNT: usize = 4;

/// Format four cells into the fixed-width row layout
pub fn format_row(vmid: &str, name: &str, status: &str, time: &str) -> String {
    format!("{:<5} {:<25} {:<8} {:<10}", vmid, name, status, time)
}

/// The header row of the summary table
pub fn header_row() -> String {
    format_row("VMID", "Name", "Status", "Time")
}

/// Summarize a backup report.
///
/// Never fails: input without any usable rows still yields the header and a
/// blank line, followed by whichever totals were found.
pub fn summarize(report: &str) -> String {
    let mut rows = Vec::new();
    let mut running_time: Option<&str> = None;
    let mut total_size: Option<&str> = None;

    for line in report.lines().map(str::trim) {
        if line.starts_with(LOGS_MARKER) {
            break;
        }
        if line.is_empty() || line == DETAILS_HEADING || line.contains(TABLE_HEADER_MARKER) {
            continue;
        }
        if line.starts_with(RUNNING_TIME_PREFIX) {
            running_time = Some(line);
            continue;
        }
        if line.starts_with(TOTAL_SIZE_PREFIX) {
            total_size = Some(line);
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().take(COLUMN_COUNT).collect();
        if let [vmid, name, status, time] = fields[..] {
            rows.push(format_row(vmid, name, status, time));
        }
    }

    let mut output = vec![header_row()];
    output.extend(rows);
    output.push(String::new());
    output.extend(running_time.map(str::to_string));
    output.extend(total_size.map(str::to_string));
    output.join("\n")
}
