//! Markup escaping payloads over the shared markup sample.

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::HarnessError,
    fixture::TextFixture,
    report,
    workload::{Operation, Workload},
};

/// Escape `&`, `<`, `>`, `'` and `"` into character entities.
fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape_markup`]. Unrecognized entities pass through as-is.
fn unescape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        let (ch, len) = if tail.starts_with("&amp;") {
            ('&', 5)
        } else if tail.starts_with("&lt;") {
            ('<', 4)
        } else if tail.starts_with("&gt;") {
            ('>', 4)
        } else if tail.starts_with("&#34;") {
            ('"', 5)
        } else if tail.starts_with("&#39;") {
            ('\'', 5)
        } else {
            ('&', 1)
        };
        out.push(ch);
        rest = &tail[len..];
    }
    out.push_str(rest);
    out
}

/// Escaping of the repetitive markup sample.
pub struct HtmlEscape {
    fixture: Arc<TextFixture>,
}

impl HtmlEscape {
    pub fn new(fixture: Arc<TextFixture>) -> Self {
        Self { fixture }
    }
}

impl Workload for HtmlEscape {
    fn name(&self) -> &str {
        "html.escape"
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let fixture = Arc::clone(&self.fixture);
        Ok(Box::new(move || {
            black_box(escape_markup(fixture.markup()).len());
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::mib_per_sec(total_ops, self.fixture.markup().len(), duration)
    }
}

/// Unescaping of the pre-escaped markup sample, built once at construction
/// and shared read-only across workers.
pub struct HtmlUnescape {
    escaped: Arc<String>,
}

impl HtmlUnescape {
    pub fn new(fixture: Arc<TextFixture>) -> Self {
        Self {
            escaped: Arc::new(escape_markup(fixture.markup())),
        }
    }
}

impl Workload for HtmlUnescape {
    fn name(&self) -> &str {
        "html.unescape"
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let escaped = Arc::clone(&self.escaped);
        Ok(Box::new(move || {
            black_box(unescape_markup(&escaped).len());
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::mib_per_sec(total_ops, self.escaped.len(), duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_replaces_all_special_characters() {
        let escaped = escape_markup("a < b & c > 'd' \"e\"");
        assert_eq!(escaped, "a &lt; b &amp; c &gt; &#39;d&#39; &#34;e&#34;");
    }

    #[test]
    fn unescape_inverts_escape() {
        let original = "AAAAA < BBBBB > CCCCC & DDDDD ' EEEEE \" ";
        assert_eq!(unescape_markup(&escape_markup(original)), original);
    }

    #[test]
    fn lone_ampersand_passes_through() {
        assert_eq!(unescape_markup("a &x b"), "a &x b");
    }

    #[test]
    fn workloads_run_over_the_fixture_sample() {
        let fixture = Arc::new(TextFixture::new());
        let mut escape = HtmlEscape::new(Arc::clone(&fixture)).setup().unwrap();
        escape().unwrap();
        let mut unescape = HtmlUnescape::new(fixture).setup().unwrap();
        unescape().unwrap();
    }
}
