//! CLI output formatting.
//!
//! Each written file produces one progress line naming the source and the
//! output:
//!
//! ```text
//! Resized a.jpg to a_resized.jpg
//! Resized b.png to b_resized.png
//! ```
//!
//! Skipped files print nothing. Format functions are pure (they return lines)
//! and `print_*` wrappers write them to stdout.

use crate::process::ProcessEvent;

/// Format a progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Resized(resized) => vec![format!(
            "Resized {} to {}",
            resized.source_name, resized.output_name
        )],
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}
