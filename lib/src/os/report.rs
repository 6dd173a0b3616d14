//! Fixed report layout shared by every command.

pub const RULE: &str = "-------------------------------------------";
/// Last line of every report.
pub const PROMPT: &str = "[Ready for input] >";
/// First line of every report starts with this.
pub const BANNER_PREFIX: &str = "[BlockchainOS";

/// Body lines of a report. [`Report::finish`] wraps them between the status
/// header and the footer.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
    pub fn blank(self) -> Self {
        self.line("")
    }
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
    pub fn finish(self, header: &str) -> String {
        let mut out = String::from(header);
        for line in self.lines {
            out.push('\n');
            out.push_str(&line);
        }
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out.push_str(PROMPT);
        out
    }
}
