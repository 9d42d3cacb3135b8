//! Terminal rendering for markdown output
//!
//! Rich mode styles headers and checklist marks and runs everything else
//! through termimad. Plain mode prints the markdown as is.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const DONE_MARK: &str = "- [x] ";
const PENDING_MARK: &str = "- [ ] ";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            println!("{}", self.style_line(line));
        }
        Ok(())
    }

    fn style_line(&self, line: &str) -> String {
        if line.starts_with('#') {
            format!("\x1b[34m{line}\x1b[0m")
        } else if let Some(rest) = line.strip_prefix(DONE_MARK) {
            format!("\x1b[32m✓\x1b[0m {}", self.skin.inline(rest))
        } else if let Some(rest) = line.strip_prefix(PENDING_MARK) {
            format!("\x1b[90m·\x1b[0m {}", self.skin.inline(rest))
        } else {
            self.skin.inline(line).to_string()
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_rich_styles_headers_and_checklist() {
        let renderer = TerminalRenderer::new(true);

        assert_eq!(renderer.style_line("# 1. v1"), "\x1b[34m# 1. v1\x1b[0m");
        assert!(renderer.style_line("- [x] Done step").starts_with("\x1b[32m✓"));
        assert!(renderer.style_line("- [ ] Open step").starts_with("\x1b[90m·"));
    }
}
