//! JUnit-style XML report rendering

use std::collections::HashMap;
use std::fmt::Write;

/// Fixed display name of the root `<testsuite>` element.
pub const REPORT_SUITE_NAME: &str = "Marten JS tests";

/// Render the structured report for a completed run.
///
/// `tests_run` fixes element order. A name with no recorded duration was
/// never actually executed; it is skipped rather than faulted on.
pub fn build_xml(
    duration_ms: u64,
    tests_run: &[String],
    durations: &HashMap<String, f64>,
    failures: &HashMap<String, String>,
) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    let _ = writeln!(
        xml,
        "<testsuite name=\"{}\" failures=\"{}\" time=\"{}\">",
        escape_attribute(REPORT_SUITE_NAME),
        failures.len(),
        format_seconds(duration_ms as f64 / 1000.0),
    );

    for name in tests_run {
        let Some(duration) = durations.get(name) else {
            continue;
        };

        let _ = write!(
            xml,
            "  <testcase name=\"{}\" time=\"{}\"",
            escape_attribute(name),
            format_seconds(*duration),
        );

        match failures.get(name) {
            Some(message) => {
                xml.push_str(">\n");
                let _ = writeln!(xml, "    <failure>{}</failure>", cdata(message));
                xml.push_str("  </testcase>\n");
            }
            None => xml.push_str(" />\n"),
        }
    }

    xml.push_str("</testsuite>\n");
    xml
}

fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.3}")
}

/// Escape text for attribute position. Whitespace control characters get
/// character references; a parser would otherwise normalize them to spaces
/// and the name would round-trip lossily.
fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

/// Wrap arbitrary text in a CDATA section. A literal `]]>` in the payload
/// is split across two sections so it cannot terminate the first early.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
