use std::io::{BufRead, Write};

use anyhow::Context;
use taskboard_model::{BoardView, TaskBoard, ViewLabels};
use tracing::{debug, info, warn};

use crate::commands::{self, Command, HELP_TEXT};
use crate::config::Config;
use crate::render::Renderer;

/// Whether the session keeps reading input after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One mounted board plus everything needed to draw it in a terminal.
#[derive(Debug)]
pub struct Session {
    board: TaskBoard,
    labels: ViewLabels,
    renderer: Renderer,
    prompt: String,
}

impl Session {
    pub fn new(board: TaskBoard, labels: ViewLabels, renderer: Renderer, prompt: String) -> Self {
        Self {
            board,
            labels,
            renderer,
            prompt,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let mut board = if cfg.seed_demo_tasks()? {
            TaskBoard::with_demo_tasks()
        } else {
            TaskBoard::empty()
        };
        board.set_filter(cfg.default_filter()?);

        let renderer = Renderer::new(cfg)?;
        debug!(tasks = board.tasks().len(), filter = %board.filter(), "board mounted");

        Ok(Self::new(board, cfg.view_labels(), renderer, cfg.prompt()))
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn render<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let view = BoardView::build(&self.board, &self.labels);
        self.renderer.render_board(out, &view)
    }

    /// Runs one line of input. Malformed lines are reported to `out` and do
    /// not end the session; only I/O failures are returned as errors.
    #[tracing::instrument(skip(self, out))]
    pub fn handle_line<W: Write>(&mut self, line: &str, mut out: W) -> anyhow::Result<Flow> {
        let command = match commands::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                warn!(error = %err, "rejected input line");
                writeln!(out, "error: {err:#}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Board(events) => {
                let mut changed = false;
                for event in events {
                    changed |= self.board.dispatch(event);
                }
                if changed {
                    self.render(&mut out)?;
                } else {
                    debug!("event left the board unchanged");
                }
            }
            Command::Show => self.render(&mut out)?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.board)
                    .context("failed to encode board as JSON")?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Renders the board, then feeds it `input` line by line until EOF or
    /// `quit`. The prompt is printed only when `interactive` is set.
    #[tracing::instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
        interactive: bool,
    ) -> anyhow::Result<()> {
        self.render(&mut out)?;

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.prompt)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                info!("input closed");
                break;
            };
            let line = line.context("failed to read input line")?;

            if self.handle_line(&line, &mut out)? == Flow::Quit {
                info!("quit requested");
                break;
            }
        }

        out.flush()?;
        Ok(())
    }
}
