//! First-run tour.
//!
//! Six steps, each pointing at one part of the workbench by the commands
//! that drive it. The tour runs automatically on the first session (no
//! seen flag stored yet) and can be replayed anytime with `tour`. Enter
//! advances, `s` skips; either way of leaving marks the flag so later
//! sessions start quietly.

use std::io::{self, BufRead, Write};

/// One tour stop: the commands it points at plus a blurb.
#[derive(Debug, Clone, Copy)]
pub struct TourStep {
    pub commands: &'static str,
    pub text: &'static str,
}

/// The steps, in presentation order.
pub const STEPS: [TourStep; 6] = [
    TourStep {
        commands: "show",
        text: "Welcome to Iris! The preview bar at the top of the panel is \
               your gradient, sampled live. It redraws after every edit.",
    },
    TourStep {
        commands: "add · rm · color · move · alpha",
        text: "These edit the color stops: add new ones, remove extras, and \
               change a stop's color, position, or opacity by its id.",
    },
    TourStep {
        commands: "dir · angle · presets",
        text: "Control the gradient direction: pick a compass preset or dial \
               in a custom angle in degrees.",
    },
    TourStep {
        commands: "css · tw · copy",
        text: "The CSS and Tailwind output is derived automatically. \
               `copy css` or `copy tw` puts it on your clipboard, ready for \
               your projects.",
    },
    TourStep {
        commands: "save · list · load · delete",
        text: "Save favorite gradients for quick access later and build up a \
               personal gradient library.",
    },
    TourStep {
        commands: "theme",
        text: "Customize the workbench with different themes. Choose the one \
               that matches your vibe.",
    },
];

/// Walks the steps interactively. Returns `false` when the user skipped.
pub fn run(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<bool> {
    writeln!(output)?;
    writeln!(output, "  A quick tour (Enter to continue, s to skip):")?;
    for (index, step) in STEPS.iter().enumerate() {
        writeln!(output)?;
        writeln!(output, "  [{}/{}] {}", index + 1, STEPS.len(), step.commands)?;
        writeln!(output, "        {}", step.text)?;
        write!(output, "  > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // stdin closed mid-tour; treat like a skip.
            writeln!(output)?;
            return Ok(false);
        }
        if line.trim().eq_ignore_ascii_case("s") {
            writeln!(output, "  Tour skipped. `tour` replays it anytime.")?;
            return Ok(false);
        }
    }
    writeln!(output)?;
    writeln!(output, "  That's the tour. `help` lists every command.")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_walks_all_steps_to_completion() {
        let mut input = io::Cursor::new("\n".repeat(STEPS.len()));
        let mut output = Vec::new();
        assert!(run(&mut input, &mut output).unwrap());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[1/6]"));
        assert!(text.contains("[6/6]"));
        assert!(text.contains("That's the tour"));
    }

    #[test]
    fn s_skips_immediately() {
        let mut input = io::Cursor::new("s\n");
        let mut output = Vec::new();
        assert!(!run(&mut input, &mut output).unwrap());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[1/6]"));
        assert!(!text.contains("[2/6]"));
    }

    #[test]
    fn closed_input_counts_as_a_skip() {
        let mut input = io::Cursor::new("\n");
        let mut output = Vec::new();
        assert!(!run(&mut input, &mut output).unwrap());
    }
}
