use crate::core::checks::pillar_score;
use crate::domain::model::{AltText, AriaRoles, ScreenReaderReport, SemanticTable};
use regex::Regex;

/// Screen-reader checks over the rendered chart markup (HTML/SVG).
pub struct ScreenReaderChecks {
    html: String,
}

impl ScreenReaderChecks {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    /// Looks for a non-empty `alt` attribute on images and a bare `<desc>`
    /// element in SVG markup.
    pub fn check_alt_text(&self) -> AltText {
        let img_alt = Regex::new(r#"<img[^>]+alt="[^"]+""#).unwrap();
        let desc = Regex::new(r"(?s)<desc>.*?</desc>").unwrap();
        AltText {
            has_img_alt: img_alt.is_match(&self.html),
            has_desc: desc.is_match(&self.html),
        }
    }

    /// Collects every `role` attribute value in document order.
    pub fn check_aria_roles(&self) -> AriaRoles {
        let role = Regex::new(r#"role="([^"]+)""#).unwrap();
        let roles = role
            .captures_iter(&self.html)
            .map(|caps| caps[1].to_string())
            .collect();
        AriaRoles { roles }
    }

    pub fn check_semantic_table(&self) -> SemanticTable {
        SemanticTable {
            has_table: self.html.contains("<table"),
            has_th: self.html.contains("<th"),
        }
    }

    pub fn run_all(&self) -> ScreenReaderReport {
        let alt_text = self.check_alt_text();
        let aria_roles = self.check_aria_roles();
        let semantic_table = self.check_semantic_table();

        let passed = usize::from(alt_text.has_img_alt || alt_text.has_desc)
            + usize::from(!aria_roles.roles.is_empty())
            + usize::from(semantic_table.has_table && semantic_table.has_th);
        let score = pillar_score(passed, 3);

        ScreenReaderReport {
            alt_text,
            aria_roles,
            semantic_table,
            score,
        }
    }
}
