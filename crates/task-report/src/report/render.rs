use super::records::TaskRecord;
use std::fmt::Write;

/// Public path of the PDF report produced outside this crate.
pub const REPORT_ARTIFACT_PATH: &str = "/task-report.pdf";

const PAGE_TITLE: &str = "PHP Programming Tasks Report";
const PAGE_SUMMARY: &str = "Solutions to the assigned PHP exercises: the aim of each task, what the program does, and its complete source listing. The full report adds captured program output and a conclusion for every task.";

const STYLESHEET: &str = "body{font-family:system-ui,sans-serif;max-width:56rem;margin:0 auto;padding:2rem 1rem;line-height:1.5}\
.report-links a{margin-right:1rem}\
.task-card{border:1px solid #d0d7de;border-radius:8px;padding:1rem 1.25rem;margin:1.5rem 0}\
.task-card pre{background:#f6f8fa;padding:1rem;overflow-x:auto}";

/// Rendered markup for the report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    html: String,
}

impl ReportDocument {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

/// Renders the page header followed by one card per record, in order.
pub fn render(records: &[TaskRecord]) -> ReportDocument {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{}</title>", escape_html(PAGE_TITLE)).expect("write title");
    writeln!(html, "<style>{STYLESHEET}</style>").expect("write stylesheet");
    html.push_str("</head>\n<body>\n");

    render_header(&mut html);

    html.push_str("<main>\n<section class=\"tasks\">\n");
    for record in records {
        render_card(&mut html, record);
    }
    html.push_str("</section>\n</main>\n</body>\n</html>\n");

    ReportDocument { html }
}

fn render_header(html: &mut String) {
    let href = escape_html(REPORT_ARTIFACT_PATH);
    html.push_str("<header>\n");
    writeln!(html, "<h1>{}</h1>", escape_html(PAGE_TITLE)).expect("write heading");
    writeln!(html, "<p>{}</p>", escape_html(PAGE_SUMMARY)).expect("write summary");
    html.push_str("<nav class=\"report-links\">\n");
    writeln!(
        html,
        "<a href=\"{href}\" download>Download PDF report</a>"
    )
    .expect("write download link");
    writeln!(
        html,
        "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">Open report in a new tab</a>"
    )
    .expect("write viewer link");
    html.push_str("</nav>\n</header>\n");
}

fn render_card(html: &mut String, record: &TaskRecord) {
    let task = &record.descriptor;
    writeln!(
        html,
        "<article class=\"task-card\" id=\"{}\">",
        escape_html(task.id)
    )
    .expect("write card");
    writeln!(html, "<h2>{}</h2>", escape_html(task.title)).expect("write card title");
    writeln!(
        html,
        "<p><strong>Aim:</strong> {}</p>",
        escape_html(task.aim)
    )
    .expect("write aim");

    html.push_str("<ul class=\"highlights\">\n");
    for highlight in task.highlights {
        let text = escape_html(highlight);
        writeln!(html, "<li data-key=\"{text}\">{text}</li>").expect("write highlight");
    }
    html.push_str("</ul>\n");

    html.push_str("<details>\n<summary>View source</summary>\n");
    // The listing starts right after <code> so leading whitespace survives.
    writeln!(
        html,
        "<pre><code class=\"language-php\">{}</code></pre>",
        escape_html(&record.source_text)
    )
    .expect("write source");
    html.push_str("</details>\n</article>\n");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::catalog::{TaskDescriptor, TASK_CATALOG};

    fn record(descriptor: TaskDescriptor, source_text: &str) -> TaskRecord {
        TaskRecord {
            descriptor,
            source_text: source_text.to_string(),
        }
    }

    fn sample_records() -> Vec<TaskRecord> {
        vec![
            record(TASK_CATALOG[0], "<?php\nif ($a > $b) {\n    echo \"$a\";\n}\n"),
            record(TASK_CATALOG[1], "<?php\necho strrev('Hello & bye');\n"),
        ]
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = sample_records();
        assert_eq!(render(&records), render(&records));
    }

    #[test]
    fn header_links_twice_to_the_report() {
        let document = render(&[]);
        let html = document.html();
        let href = format!("href=\"{REPORT_ARTIFACT_PATH}\"");
        assert_eq!(html.matches(&href).count(), 2);
        assert!(html.contains("download>Download PDF report</a>"));
        assert!(html.contains("target=\"_blank\""));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn cards_render_in_record_order() {
        let document = render(&sample_records());
        let html = document.html();
        let first = html.find("id=\"task-1\"").expect("task-1 card");
        let second = html.find("id=\"task-2\"").expect("task-2 card");
        assert!(first < second);
        assert_eq!(html.matches("<details>").count(), 2);
        assert!(!html.contains("<details open"));
    }

    #[test]
    fn highlights_keep_authored_order() {
        let document = render(&sample_records()[..1]);
        let html = document.html();
        let positions: Vec<usize> = TASK_CATALOG[0]
            .highlights
            .iter()
            .map(|highlight| html.find(&escape_html(highlight)).expect("highlight present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn source_markup_is_escaped() {
        let document = render(&sample_records());
        let html = document.html();
        assert!(html.contains("&lt;?php\necho strrev(&#39;Hello &amp; bye&#39;);\n</code>"));
        assert!(!html.contains("<?php"));
    }

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
