//! File names for exported documents.

use crate::config::ExportConfig;

const FALLBACK_STEM: &str = "untitled";

/// File name for a JSON export.
pub fn json_export_name(config: &ExportConfig) -> String {
    config.json_filename().to_string()
}

/// File name for a markdown export, derived from the document's first line.
///
/// Leading `#`s and whitespace are dropped and characters that are not
/// allowed in file names become `_`.
///
/// # Examples
///
/// ```
/// # use mindgraph::export::markdown_export_name;
/// assert_eq!(markdown_export_name("# Q3: plan/review\n- a"), "Q3_ plan_review.md");
/// assert_eq!(markdown_export_name(""), "untitled.md");
/// ```
pub fn markdown_export_name(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let title = first_line
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end();

    let stem: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = stem.trim();

    if stem.is_empty() {
        format!("{FALLBACK_STEM}.md")
    } else {
        format!("{stem}.md")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_name() {
        assert_eq!(json_export_name(&ExportConfig::default()), "知识图谱.json");
        assert_eq!(
            json_export_name(&ExportConfig::new(Some("map.json".to_string()))),
            "map.json"
        );
    }

    #[test]
    fn test_markdown_export_name() {
        assert_eq!(markdown_export_name("## 项目计划\n内容"), "项目计划.md");
        assert_eq!(markdown_export_name("plain title  "), "plain title.md");
        assert_eq!(markdown_export_name("a<b>|c?\t"), "a_b__c_.md");
        assert_eq!(markdown_export_name("#   \nsecond"), "untitled.md");
        assert_eq!(markdown_export_name("///"), "___.md");
    }
}
