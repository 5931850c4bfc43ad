//! Text output of tabs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fretboard::{Tab, Tuning, STRINGS};

/// How a tab is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// One line per string, highest string on top:
    ///
    /// ```text
    /// e|------|
    /// B|------|
    /// G|------|
    /// D|---0--|
    /// A|---5--|
    /// E|--10--|
    /// ```
    #[default]
    Diagram,
    /// Used strings only, low to high, on a single line: `E10 A5 D0 `.
    OneLine,
}

impl RenderMode {
    /// Whether consecutive chord voicings are separated by a blank line.
    #[must_use]
    pub const fn separates_voicings(self) -> bool {
        matches!(self, Self::Diagram)
    }
}

/// Formats a [`Tab`] in one of the [`RenderMode`]s.
#[derive(Debug, Clone, Copy)]
pub struct TabDisplay<'a> {
    tab: &'a Tab,
    mode: RenderMode,
}

impl Tab {
    #[must_use]
    pub const fn display(&self, mode: RenderMode) -> TabDisplay<'_> {
        TabDisplay { tab: self, mode }
    }
}

impl fmt::Display for TabDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tuning = Tuning::STANDARD;
        match self.mode {
            RenderMode::Diagram => {
                for string in (0..STRINGS).rev() {
                    let label = tuning.label(string);
                    match self.tab[string] {
                        Some(fret) if fret >= 10 => writeln!(f, "{label}|--{fret}--|")?,
                        Some(fret) => writeln!(f, "{label}|---{fret}--|")?,
                        None => writeln!(f, "{label}|------|")?,
                    }
                }
            }
            RenderMode::OneLine => {
                let last = STRINGS - 1;
                for string in 0..STRINGS {
                    match self.tab[string] {
                        Some(fret) => {
                            let end = if string < last { " " } else { "\n" };
                            write!(f, "{}{fret}{end}", tuning.label(string))?;
                        }
                        None if string == last => writeln!(f)?,
                        None => {}
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d_tab() -> Tab {
        Tab::new([Some(10), Some(5), Some(0), None, None, None])
    }

    #[test]
    fn test_diagram() {
        let out = d_tab().display(RenderMode::Diagram).to_string();
        assert_eq!(
            out,
            "e|------|\nB|------|\nG|------|\nD|---0--|\nA|---5--|\nE|--10--|\n"
        );
    }

    #[test]
    fn test_one_line() {
        let out = d_tab().display(RenderMode::OneLine).to_string();
        assert_eq!(out, "E10 A5 D0 \n");
    }

    #[test]
    fn test_one_line_high_string_ends_line() {
        let tab = Tab::new([None, None, None, None, Some(3), Some(12)]);
        assert_eq!(tab.display(RenderMode::OneLine).to_string(), "B3 e12\n");
    }

    #[test]
    fn test_empty_tab() {
        let tab = Tab::default();
        assert_eq!(tab.display(RenderMode::OneLine).to_string(), "\n");
        let diagram = tab.display(RenderMode::Diagram).to_string();
        assert_eq!(diagram.lines().count(), 6);
        assert!(diagram.lines().all(|l| l.ends_with("|------|")));
    }

    #[test]
    fn test_separator() {
        assert!(RenderMode::Diagram.separates_voicings());
        assert!(!RenderMode::OneLine.separates_voicings());
    }
}
