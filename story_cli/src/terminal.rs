//! Terminal front end: prints scenes, reads numbered choices.

use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;
use story_core::{Choice, SceneView, Session, StatusSnapshot, StepResult};
use tracing::info;

use crate::config::TerminalConfig;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RULE_WIDTH: usize = 80;

/// How a terminal session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A terminal action was taken.
    GameOver(StatusSnapshot),
    /// The player reached an ending scene.
    Ending(StatusSnapshot),
    /// Input closed before the story finished.
    Quit,
}

/// Drives one session over a pair of text streams.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    config: TerminalConfig,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, config: TerminalConfig) -> Self {
        Self { input, output, config }
    }

    /// Play until game over, an ending, or end of input.
    pub fn play(&mut self, session: &mut Session) -> anyhow::Result<Outcome> {
        let mut rng = rand::thread_rng();
        loop {
            let view = session.view();
            self.draw(&view, &mut rng)?;

            if view.is_ending {
                writeln!(self.output, "\n    The End.")?;
                return Ok(Outcome::Ending(view.status));
            }

            let mut choices = view.choices.clone();
            if self.config.shuffle_choices {
                choices.shuffle(&mut rng);
            }
            self.draw_choices(&choices)?;

            let Some(picked) = self.read_choice(choices.len())? else {
                info!(session = %session.id(), "terminal_input_closed");
                return Ok(Outcome::Quit);
            };

            match session.step(choices[picked].index)? {
                StepResult::Continue(_) => continue,
                StepResult::GameOver(status) => {
                    writeln!(self.output, "\n{}", status.summary_line())?;
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(Outcome::GameOver(status));
                }
            }
        }
    }

    fn draw(&mut self, view: &SceneView, rng: &mut impl Rng) -> anyhow::Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        if let Some(illustration) = &view.illustration {
            writeln!(self.output, "[{illustration}]")?;
        }
        self.write_body(&view.body, rng)?;
        writeln!(self.output, "\n\n{}", view.status.summary_line())?;
        Ok(())
    }

    fn write_body(&mut self, body: &str, rng: &mut impl Rng) -> anyhow::Result<()> {
        if !self.config.typewriter {
            write!(self.output, "{body}")?;
            return Ok(());
        }
        let base = self.config.char_delay();
        for ch in body.chars() {
            write!(self.output, "{ch}")?;
            self.output.flush()?;
            let extra = Duration::from_millis(rng.gen_range(0..=self.config.jitter_ms));
            std::thread::sleep(base + extra);
        }
        Ok(())
    }

    fn draw_choices(&mut self, choices: &[Choice]) -> anyhow::Result<()> {
        writeln!(self.output, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.output, "    Your actions:")?;
        for (position, choice) in choices.iter().enumerate() {
            writeln!(self.output, "{}. {}", position + 1, choice.label)?;
        }
        Ok(())
    }

    /// Prompt until a number in `1..=count` is entered. Returns the zero-based
    /// display position, or `None` when input is exhausted.
    fn read_choice(&mut self, count: usize) -> anyhow::Result<Option<usize>> {
        loop {
            write!(self.output, "Your choice: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim().parse::<usize>() {
                Ok(number) if (1..=count).contains(&number) => return Ok(Some(number - 1)),
                _ => writeln!(self.output, "Please enter a number from 1 to {count}.")?,
            }
        }
    }
}
