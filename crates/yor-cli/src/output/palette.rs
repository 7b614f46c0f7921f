use colored::{Color, Colorize};

/// How a table cell is drawn when colors are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Bold,
    Fg(Color),
}

/// Whether terminal output gets colored, passed down to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn cell(&self, text: &str, style: CellStyle) -> String {
        match style {
            CellStyle::Plain => text.to_string(),
            CellStyle::Bold => self.bold(text),
            CellStyle::Fg(color) => self.paint(text, color),
        }
    }
}
