use regex::Regex;

/// Normalizes raw model output before it is returned to the client.
///
/// The model tends to answer with Markdown emphasis, bullet lists and
/// loose blank lines that the plain-text chat widget cannot render, so
/// the cleaner strips those artifacts down to readable text.
///
/// Patterns are compiled once at construction; the pass order is fixed
/// because later substitutions operate on the output of earlier ones.
pub struct ResponseCleaner {
    bold: Regex,
    italic: Regex,
    ai_prefix: Regex,
    bullet: Regex,
    colon_break: Regex,
    blank_lines: Regex,
}

impl ResponseCleaner {
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.*?)\*\*").expect("valid regex pattern"),
            italic: Regex::new(r"\*(.*?)\*").expect("valid regex pattern"),
            ai_prefix: Regex::new(r"(?i)^AI:\s*").expect("valid regex pattern"),
            bullet: Regex::new(r"(?m)^[*-]\s*").expect("valid regex pattern"),
            colon_break: Regex::new(r":\s*\n").expect("valid regex pattern"),
            blank_lines: Regex::new(r"\n{2,}").expect("valid regex pattern"),
        }
    }

    /// Strip Markdown emphasis, leading "AI:" labels and bullet markers,
    /// normalize trailing colons at line ends, and collapse blank lines.
    pub fn clean(&self, raw: &str) -> String {
        let text = self.bold.replace_all(raw, "$1");
        let text = self.italic.replace_all(&text, "$1");
        // Anchored at the very start, so a single replace is enough.
        let text = self.ai_prefix.replace(&text, "");
        let text = self.bullet.replace_all(&text, "");
        let text = self.colon_break.replace_all(&text, ".\n");
        let text = self.blank_lines.replace_all(&text, "\n");
        text.trim().to_string()
    }
}

impl Default for ResponseCleaner {
    fn default() -> Self {
        Self::new()
    }
}
