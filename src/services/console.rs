// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, BufRead, IsTerminal, Write};

use crate::core::grab::InputGrab;
use crate::core::surface::{Choice, Decision, DecisionSurface};

/// Minimal line-oriented decision surface.
///
/// Stands in for a graphical front-end: same contract, no rendering
/// stack. Icon hints are ignored.
pub struct ConsoleSurface {
    closed: bool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self { closed: false }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGrab for ConsoleSurface {
    fn try_grab_input(&mut self) -> bool {
        // A controlling terminal already routes input exclusively to the
        // foreground process group.
        io::stdin().is_terminal()
    }

    fn release_grab(&mut self) {
        // Nothing held between probe and prompt on a tty.
    }
}

impl DecisionSurface for ConsoleSurface {
    fn present(&mut self, choices: &[Choice]) -> Decision {
        if self.closed || choices.is_empty() {
            return Decision::Dismissed;
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();

        for (index, choice) in choices.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}) {:<10} {}",
                index + 1,
                choice.label,
                choice.description
            );
        }
        let _ = writeln!(out, "  c) Cancel");

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            let _ = write!(out, "Select: ");
            let _ = out.flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return Decision::Dismissed,
                Ok(_) => {}
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("c") || answer.eq_ignore_ascii_case("q") {
                return Decision::Cancel;
            }

            if let Ok(number) = answer.parse::<usize>() {
                if let Some(choice) = number.checked_sub(1).and_then(|i| choices.get(i)) {
                    return Decision::Choice(choice.action);
                }
            }

            let _ = writeln!(out, "unrecognized selection: {answer}");
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_closed_surface_only_dismisses() {
        let mut surface = ConsoleSurface::new();
        surface.close();

        assert_eq!(surface.present(&[]), Decision::Dismissed);
    }
}
