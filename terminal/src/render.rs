use console::style;
use topolib::os::report::{BANNER_PREFIX, PROMPT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Banner,
    Prompt,
    Error,
    Plain,
}

pub fn classify(line: &str) -> LineKind {
    if line.starts_with(BANNER_PREFIX) {
        LineKind::Banner
    } else if line.starts_with(PROMPT) {
        LineKind::Prompt
    } else if line.contains("Error:") {
        LineKind::Error
    } else {
        LineKind::Plain
    }
}

/// Colour a report line by line. Styling is dropped automatically when
/// stdout is not a terminal.
pub fn paint(report: &str, color: bool) -> String {
    if !color {
        return report.to_string();
    }
    report
        .lines()
        .map(|line| {
            let styled = match classify(line) {
                LineKind::Banner => style(line).green().bold(),
                LineKind::Prompt => style(line).yellow().bold(),
                LineKind::Error => style(line).red(),
                LineKind::Plain => style(line).green(),
            };
            styled.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
