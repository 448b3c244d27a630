//! ANSI styling that can be switched off per render.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wraps text in SGR codes, or passes it through when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, code: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{code}{text}{RESET}")
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, BOLD)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, DIM)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(text, GREEN)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, YELLOW)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, CYAN)
    }
}
