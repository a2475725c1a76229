use std::io::{self, IsTerminal, Write};

use anyhow::anyhow;
use taskboard_model::BoardView;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

const MIN_WIDTH: usize = 40;

const PURPLE: &str = "1;35";
const BLUE: &str = "1;34";
const DIM: &str = "2";
const STRIKE: &str = "2;9";

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let color_cfg = cfg.get("color").unwrap_or_else(|| "on".to_string());
        let color = match color_cfg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => true,
            "off" | "no" | "false" | "0" => false,
            other => return Err(anyhow!("invalid color setting: {other}")),
        };

        Ok(Self {
            color: color && io::stdout().is_terminal(),
        })
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip_all, fields(rows = view.rows.len()))]
    pub fn render_board<W: Write>(&self, mut out: W, view: &BoardView) -> anyhow::Result<()> {
        let id_width = view
            .rows
            .iter()
            .map(|row| row.id.to_string().len())
            .max()
            .unwrap_or(1);

        let mut rows = Vec::with_capacity(view.rows.len());
        for row in &view.rows {
            let mark = if row.completed { "[x]" } else { "[ ]" };
            let text = if row.completed {
                self.paint(&row.text, STRIKE)
            } else {
                row.text.clone()
            };
            rows.push(format!("{mark} {:>id_width$}  {text}", row.id));
        }

        let input = if view.input.draft.is_empty() {
            self.paint(&view.input.placeholder, DIM)
        } else {
            view.input.draft.clone()
        };
        let input = format!("[ ] {input}");

        let filters = view
            .filters
            .iter()
            .map(|option| {
                if option.active {
                    self.paint(&format!("[{}]", option.label), BLUE)
                } else {
                    format!(" {} ", option.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let width = rows
            .iter()
            .chain([&input, &filters])
            .map(|line| visible_width(line))
            .chain([
                visible_width(&view.footer.remaining_label)
                    + visible_width(view.footer.clear_label)
                    + 2,
                visible_width(view.hint),
            ])
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        let title = self.paint(&view.header.title, PURPLE);
        writeln!(out, "{}", spread(&title, view.header.icon, width))?;
        writeln!(out, "{}", "=".repeat(width))?;
        writeln!(out, "{input}")?;
        writeln!(out, "{}", "-".repeat(width))?;

        if rows.is_empty() {
            writeln!(out, "{}", self.paint("(nothing here)", DIM))?;
        }
        for row in rows {
            writeln!(out, "{row}")?;
        }

        writeln!(out, "{}", "-".repeat(width))?;
        let clear = if view.footer.can_clear {
            view.footer.clear_label.to_string()
        } else {
            self.paint(view.footer.clear_label, DIM)
        };
        writeln!(
            out,
            "{}",
            spread(&view.footer.remaining_label, &clear, width)
        )?;
        writeln!(out, "{}", center(&filters, width))?;
        writeln!(out, "{}", center(&self.paint(view.hint, DIM), width))?;

        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

/// `left` and `right` pushed to opposite edges of a `width`-column line.
fn spread(left: &str, right: &str, width: usize) -> String {
    let used = visible_width(left) + visible_width(right);
    let padding = width.saturating_sub(used).max(1);
    format!("{left}{}{right}", " ".repeat(padding))
}

fn center(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text)) / 2;
    format!("{}{text}", " ".repeat(padding))
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
