//! Plain-text rendering of a resolved guide for terminals.

use fieldguide_types::{GuideSource, Resolution};
use textwrap::Options;

/// Narrowest width the renderer will wrap to.
const MIN_WIDTH: usize = 20;

const SECURITY_NOTICE: &str = "Keep this value private. Do not share it, paste it into chats, or commit it to source control.";

/// Renders question, title, steps, link, example, and security notice.
///
/// Blank steps are kept as blank lines; authors use them to separate groups of steps.
pub fn render_resolution(resolution: &Resolution, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let guide = &resolution.guide;
    let mut lines: Vec<String> = vec![resolution.question_label.clone()];
    if guide.title != resolution.question_label {
        lines.push(guide.title.clone());
    }
    lines.push(String::new());

    let step_options = Options::new(width).subsequent_indent("    ");
    for step in &guide.steps {
        if step.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(textwrap::wrap(step, &step_options).into_iter().map(|line| line.into_owned()));
    }

    if guide.url.is_some() || guide.example.is_some() {
        lines.push(String::new());
    }
    if let Some(url) = &guide.url {
        lines.push(format!("Link: {url}"));
    }
    if let Some(example) = &guide.example {
        lines.push(format!("Example: {example}"));
    }

    if resolution.security_warning() {
        lines.push(String::new());
        let notice_options = Options::new(width).initial_indent("! ").subsequent_indent("  ");
        lines.extend(textwrap::wrap(SECURITY_NOTICE, &notice_options).into_iter().map(|line| line.into_owned()));
    }

    lines.push(String::new());
    lines.push(source_line(resolution));
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

fn source_line(resolution: &Resolution) -> String {
    match (resolution.source, resolution.category) {
        (GuideSource::Generated, Some(category)) => format!("Source: generated ({category})"),
        (source, _) => format!("Source: {source}"),
    }
}

#[cfg(test)]
mod tests {
    use fieldguide_types::{Guide, GuideCategory};

    use super::*;

    fn resolution(guide: Guide, source: GuideSource, category: Option<GuideCategory>) -> Resolution {
        Resolution {
            question_label: "How to get Token?".to_string(),
            guide,
            source,
            category,
        }
    }

    #[test]
    fn blank_steps_survive_rendering() {
        let guide = Guide::new("Token guide", ["Step 1: Open settings", "", "Tip: rotate often"]);
        let rendered = render_resolution(&resolution(guide, GuideSource::Catalog, None), 80);
        assert!(rendered.contains("Step 1: Open settings\n\nTip: rotate often"));
        assert!(rendered.starts_with("How to get Token?\nToken guide\n"));
    }

    #[test]
    fn long_steps_wrap_with_hanging_indent() {
        let long = "Step 1: ".to_string() + &"word ".repeat(20);
        let guide = Guide::new("How to get Token?", [long]);
        let rendered = render_resolution(&resolution(guide, GuideSource::Catalog, None), 30);
        let step_lines: Vec<&str> = rendered.lines().skip(2).take_while(|line| !line.is_empty()).collect();
        assert!(step_lines.len() > 1);
        assert!(step_lines.iter().skip(1).all(|line| line.starts_with("    ")));
        assert!(step_lines.iter().all(|line| line.len() <= 30));
    }

    #[test]
    fn security_notice_follows_the_final_flag() {
        let flagged = Guide::new("How to get Token?", ["Step 1: Copy"]).sensitive();
        let rendered = render_resolution(&resolution(flagged, GuideSource::Generated, Some(GuideCategory::Token)), 80);
        assert!(rendered.contains("! Keep this value private."));
        assert!(rendered.ends_with("Source: generated (Token)\n"));

        let plain = Guide::new("How to get Token?", ["Step 1: Copy"]);
        let rendered = render_resolution(&resolution(plain, GuideSource::HelpText, None), 80);
        assert!(!rendered.contains("Keep this value private"));
        assert!(rendered.ends_with("Source: help_text\n"));
    }

    #[test]
    fn link_and_example_are_listed() {
        let guide = Guide::new("How to get Token?", ["Step 1: Copy"])
            .with_url("https://example.com/tokens")
            .with_example("tok_123");
        let rendered = render_resolution(&resolution(guide, GuideSource::Catalog, None), 80);
        assert!(rendered.contains("Link: https://example.com/tokens\nExample: tok_123"));
    }
}
