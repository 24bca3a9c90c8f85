//! Free-text help parsing.
//!
//! Field help is usually a loose paragraph ("How to get your key: 1) open the console 2) ...").
//! This module turns such text into a [`Guide`] when it already carries step structure.
//!
//! Parsing is gated by [`looks_structured`]; text without any step markers is rejected outright,
//! even when splitting it on newlines would produce something step-shaped. Steps are then
//! extracted by an ordered chain of strategies, stricter ones first, and the first strategy that
//! yields at least one step wins.

use fieldguide_types::Guide;
use fieldguide_util::{contains_any, starts_with_ignore_case};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Leading "How to get X" phrase; group 1 is the subject.
static HOW_TO_GET_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*how to get\s+([^?:\n]+)").expect("title regex should compile"));

/// Loose step markers accepted by the detection gate.
static STEP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\d+\)|step\s*\d+").expect("marker regex should compile"));

/// `1) do X 2) do Y`
static NUMBERED_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\)\s*").expect("paren regex should compile"));

/// `Step 1: do X Step 2 - do Y`
static STEP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bstep\s*(\d+)\s*[:.)\-–]?\s*").expect("step regex should compile"));

/// `1. do X 2. do Y`; the dot must be followed by whitespace so decimals are left alone.
static NUMBERED_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)(\d+)\.\s+").expect("dot regex should compile"));

/// A dangling "Step" left at the end of a body when the next marker was `2)` in `Step 2)`.
static TRAILING_STEP_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s*\bstep\s*$").expect("trailing regex should compile"));

static EXAMPLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)example:[ \t]*(.+)$").expect("example regex should compile"));

static FIRST_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url regex should compile"));

/// Substrings that make parsed help text security-sensitive.
const SECURITY_SIGNALS: &[&str] = &["secure", "secret", "token", "key"];

/// Line prefixes skipped by the filtered newline strategy.
const NON_STEP_PREFIXES: &[&str] = &["how to get", "example", "note"];

type StepStrategy = fn(&str) -> Vec<String>;

/// Step extraction strategies in the order they are tried.
const STEP_STRATEGIES: &[(&str, StepStrategy)] = &[
    ("numbered_paren", numbered_paren_steps),
    ("step_prefix", step_prefix_steps),
    ("numbered_dot", numbered_dot_steps),
    ("filtered_lines", filtered_line_steps),
    ("raw_lines", raw_line_steps),
];

/// Guide parsed out of help text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHelpText {
    pub guide: Guide,
    /// True when the title came from a leading "How to get X" phrase rather than the field label.
    pub explicit_title: bool,
    /// Name of the strategy that produced the steps.
    pub strategy: &'static str,
}

/// Detection gate: true when the text carries any step-like signal.
pub fn looks_structured(help_text: &str) -> bool {
    help_text.to_lowercase().contains("how to get")
        || help_text.contains("Step 1")
        || help_text.contains("1)")
        || help_text.contains("1.")
        || STEP_MARKER.is_match(help_text)
}

/// Parses help text into a guide, or returns `None` when it has no usable structure.
///
/// `field_label` provides the fallback title when the text does not open with "How to get X".
pub fn parse_help_text(help_text: &str, field_label: &str) -> Option<ParsedHelpText> {
    if !looks_structured(help_text) {
        return None;
    }

    let (strategy, steps) = STEP_STRATEGIES.iter().find_map(|(name, strategy)| {
        let steps = strategy(help_text);
        (!steps.is_empty()).then_some((*name, steps))
    })?;
    trace!(strategy, steps = steps.len(), "parsed help text");

    let (title, explicit_title) = match extract_title(help_text) {
        Some(title) => (title, true),
        None => (fallback_title(field_label), false),
    };

    Some(ParsedHelpText {
        guide: Guide {
            title,
            steps,
            url: extract_url(help_text),
            example: extract_example(help_text),
            security_warning: Some(contains_any(&help_text.to_lowercase(), SECURITY_SIGNALS)),
        },
        explicit_title,
        strategy,
    })
}

fn extract_title(help_text: &str) -> Option<String> {
    let subject = HOW_TO_GET_TITLE.captures(help_text)?.get(1)?.as_str().trim();
    let subject = subject.trim_end_matches(['.', ',', ';']).trim_end();
    if subject.is_empty() {
        return None;
    }
    Some(format!("How to get {subject}?"))
}

fn fallback_title(field_label: &str) -> String {
    let label = field_label.trim();
    if label.is_empty() {
        "How to get this value?".to_string()
    } else {
        format!("How to get {label}?")
    }
}

fn extract_example(help_text: &str) -> Option<String> {
    let example = EXAMPLE_LINE.captures(help_text)?.get(1)?.as_str().trim();
    (!example.is_empty()).then(|| example.to_string())
}

fn extract_url(help_text: &str) -> Option<String> {
    FIRST_URL.find(help_text).map(|found| found.as_str().to_string())
}

fn numbered_paren_steps(help_text: &str) -> Vec<String> {
    split_on_markers(help_text, &NUMBERED_PAREN)
}

fn step_prefix_steps(help_text: &str) -> Vec<String> {
    split_on_markers(help_text, &STEP_PREFIX)
}

fn numbered_dot_steps(help_text: &str) -> Vec<String> {
    split_on_markers(help_text, &NUMBERED_DOT)
}

fn filtered_line_steps(help_text: &str) -> Vec<String> {
    help_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !NON_STEP_PREFIXES.iter().any(|prefix| starts_with_ignore_case(line, prefix)))
        .enumerate()
        .map(|(index, line)| format!("Step {}: {line}", index + 1))
        .collect()
}

fn raw_line_steps(help_text: &str) -> Vec<String> {
    let mut lines = help_text.lines().map(str::trim).filter(|line| !line.is_empty()).peekable();
    if lines.peek().is_some_and(|first| starts_with_ignore_case(first, "how to get")) {
        lines.next();
    }
    lines.map(str::to_string).collect()
}

/// Slices the text between consecutive marker matches. Group 1 of `marker` is the step number.
fn split_on_markers(help_text: &str, marker: &Regex) -> Vec<String> {
    let markers: Vec<(&str, usize, usize)> = marker
        .captures_iter(help_text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let number = captures.get(1)?;
            Some((number.as_str(), whole.start(), whole.end()))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .filter_map(|(index, (number, _, body_start))| {
            let body_end = markers.get(index + 1).map_or(help_text.len(), |(_, next_start, _)| *next_start);
            let body = clean_step_body(&help_text[*body_start..body_end]);
            (!body.is_empty()).then(|| format!("Step {number}: {body}"))
        })
        .collect()
}

/// Joins a step body onto one line, stopping at a trailing "Example:" or "Note:" line.
fn clean_step_body(raw: &str) -> String {
    let joined = raw
        .lines()
        .map(str::trim)
        .take_while(|line| !starts_with_ignore_case(line, "example") && !starts_with_ignore_case(line, "note"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    TRAILING_STEP_WORD.replace(&joined, "").trim().to_string()
}
