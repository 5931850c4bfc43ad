use anyhow::Result;
use note2tab_core::{Chord, Clef, Context, Fretboard, KeySignature, Note, RenderMode};
use std::io::Write;

use crate::cli::{Directive, UsageError};
use crate::config::Config;

/// Applies directives left to right, writing each tab as it is produced.
#[derive(Debug)]
pub struct Session<W> {
    ctx: Context,
    mode: RenderMode,
    notes: usize,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &Config, out: W) -> Self {
        Self {
            ctx: Context::new(config.clef),
            mode: config.render_mode(),
            notes: 0,
            out,
        }
    }

    /// Run every directive, then fail with a usage error if no note was seen.
    pub fn run(&mut self, directives: impl IntoIterator<Item = Directive>) -> Result<()> {
        for directive in directives {
            self.apply(directive)?;
        }
        self.out.flush()?;
        if self.notes == 0 {
            return Err(UsageError::new("no notes given").into());
        }
        Ok(())
    }

    pub fn apply(&mut self, directive: Directive) -> Result<()> {
        match directive {
            Directive::OneLine => self.mode = RenderMode::OneLine,
            Directive::Shift(shift) => {
                log::info!("Transposing following notes by {} half-steps", shift);
                self.ctx.shift = shift;
            }
            Directive::Clef(clef) => self.ctx.clef = clef.parse::<Clef>()?,
            Directive::Key(spec) => self.ctx.key = spec.parse::<KeySignature>()?,
            Directive::Note(token) => {
                let note = Note::resolve(&token, &self.ctx)?;
                self.notes += 1;
                let tab = Fretboard::new(self.ctx.clef).map(&note);
                write!(self.out, "{}", tab.display(self.mode))?;
            }
            Directive::Chord(token) => {
                let chord = Chord::parse(&token, &self.ctx)?;
                self.notes += chord.len();
                for (i, tab) in chord.voicings(self.ctx.clef).enumerate() {
                    if i > 0 && self.mode.separates_voicings() {
                        writeln!(self.out)?;
                    }
                    write!(self.out, "{}", tab.display(self.mode))?;
                }
            }
        }
        Ok(())
    }

    /// Notes resolved so far, chord notes included.
    pub fn notes_processed(&self) -> usize {
        self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use note2tab_core::Error;

    fn note(token: &str) -> Directive {
        Directive::Note(token.to_string())
    }

    fn run(directives: Vec<Directive>) -> (Result<()>, String) {
        let mut buf = Vec::new();
        let result = Session::new(&Config::default(), &mut buf).run(directives);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_single_note_diagram() {
        let (result, out) = run(vec![note("0")]);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "e|------|\nB|------|\nG|------|\nD|---0--|\nA|---5--|\nE|--10--|\n"
        );
    }

    #[test]
    fn test_one_line_applies_to_later_notes() {
        let (result, out) = run(vec![Directive::OneLine, note("0"), note("8")]);
        assert!(result.is_ok());
        assert_eq!(out, "E10 A5 D0 \nA19 D14 G9 B5 e0\n");
    }

    #[test]
    fn test_chord_voicings_separated() {
        let (result, out) = run(vec![Directive::Chord("(0 2 4)".to_string())]);
        assert!(result.is_ok());
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].ends_with("D|---7--|\nA|---8--|\nE|--10--|"));
    }

    #[test]
    fn test_chord_one_line() {
        let (result, out) = run(vec![
            Directive::OneLine,
            Directive::Chord("(0 2 4)".to_string()),
        ]);
        assert!(result.is_ok());
        assert_eq!(out, "E10 A8 D7 \nA5 D3 G2 \n");
    }

    #[test]
    fn test_shift_only_affects_later_notes() {
        let (_, out) = run(vec![
            Directive::OneLine,
            note("0"),
            Directive::Shift(12),
            note("0"),
        ]);
        assert_eq!(out, "E10 A5 D0 \nE22 A17 D12 G7 B3 \n");
    }

    #[test]
    fn test_key_then_note() {
        let (_, out) = run(vec![
            Directive::OneLine,
            Directive::Key("#3".to_string()),
            note("3"),
            note("%3"),
        ]);
        assert_eq!(out, "E16 A11 D6 G1 \nE15 A10 D5 G0 \n");
    }

    #[test]
    fn test_invalid_clef() {
        let (result, out) = run(vec![Directive::Clef("x".to_string()), note("0")]);
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidClef("x".to_string()))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_kept_before_error() {
        let (result, out) = run(vec![Directive::OneLine, note("0"), note("x1")]);
        assert!(result.is_err());
        assert_eq!(out, "E10 A5 D0 \n");
    }

    #[test]
    fn test_no_notes_is_usage_error() {
        let (result, _) = run(vec![Directive::OneLine]);
        assert!(result.unwrap_err().downcast_ref::<UsageError>().is_some());

        let (result, _) = run(vec![Directive::Chord("()".to_string())]);
        assert!(result.unwrap_err().downcast_ref::<UsageError>().is_some());
    }

    #[test]
    fn test_configured_defaults() {
        let config = Config {
            clef: Clef::Bass,
            one_line: true,
            ..Config::default()
        };
        let mut buf = Vec::new();
        let mut session = Session::new(&config, &mut buf);
        session.apply(note("7")).unwrap();
        assert_eq!(session.notes_processed(), 1);
        drop(session);
        assert_eq!(String::from_utf8(buf).unwrap(), "E1 \n");
    }
}
