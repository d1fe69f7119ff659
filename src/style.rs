use clap::ValueEnum;
use crossterm::{
    style::{style, Color, Stylize},
    tty::IsTty,
};
use std::fmt::Display;
use strum::Display;

#[derive(Display, Default, PartialEq, Eq, Copy, Clone, Debug, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn painter(self) -> Painter {
        let enabled = match self {
            ColorChoice::Auto => std::io::stdout().is_tty(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Painter { enabled }
    }
}

/// Applies terminal colors to report fragments, or passes them through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn pass_mark(&self) -> String {
        self.paint("✓", Color::Green)
    }

    pub fn fail_mark(&self) -> String {
        self.paint("✗", Color::Red)
    }

    pub fn mark(&self, passed: bool) -> String {
        if passed {
            self.pass_mark()
        } else {
            self.fail_mark()
        }
    }

    pub fn match_marker(&self) -> String {
        if self.enabled {
            style(">>>").with(Color::Yellow).bold().to_string()
        } else {
            ">>>".into()
        }
    }

    pub fn line_number(&self, line_number: usize) -> String {
        self.paint(line_number, Color::Green)
    }

    pub fn file_path(&self, path: impl Display) -> String {
        self.paint(path, Color::Magenta)
    }

    pub fn not_found(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    fn paint(&self, text: impl Display, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}
