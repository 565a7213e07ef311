//! Interactive session state
//!
//! The session owns the current grid snapshot and replaces it on every
//! commit; the engine itself never keeps one.

use anyhow::{bail, Context, Result};
use gridcalc::{AggregateFunction, CellAddress, CellValue, FormulaEngine, Grid, GridSettings};
use std::fmt::Write;

/// What the front end should do after a line is handled
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print this text
    Output(String),
    /// Nothing to print
    Silent,
    /// End the session
    Quit,
}

/// The current snapshot plus the engine that updates it
pub struct Session {
    engine: FormulaEngine,
    grid: Grid,
}

impl Session {
    pub fn new(settings: GridSettings) -> gridcalc::Result<Self> {
        Ok(Self {
            engine: FormulaEngine::from_settings(&settings),
            grid: Grid::with_settings(&settings)?,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Evaluate `raw` against the current snapshot and store the result
    pub fn commit(&mut self, addr: CellAddress, raw: &str) -> Result<&CellValue> {
        self.grid = self
            .engine
            .commit(&self.grid, addr, raw)
            .with_context(|| format!("Cannot write to {}", addr))?;
        Ok(self.grid.get(addr)?)
    }

    /// Handle one input line
    ///
    /// Lines are either a command (`help`, `show`, `get A1`, `quit`) or a
    /// cell reference followed by the raw text to commit to it. A bare
    /// reference clears the cell.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(Outcome::Silent);
        }

        let (head, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match head.to_ascii_lowercase().as_str() {
            "help" => return Ok(Outcome::Output(help_text(self.engine.marker()))),
            "show" => return Ok(Outcome::Output(self.render())),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "get" => {
                let addr = parse_address(rest.trim())?;
                let value = self.grid.get(addr)?;
                return Ok(Outcome::Output(format!("{} = {}", addr, value)));
            }
            _ => {}
        }

        let addr = parse_address(head)?;
        let value = self.commit(addr, rest)?;
        Ok(Outcome::Output(format!("{} = {}", addr, value)))
    }

    /// Render the grid as a table with column letters and row numbers
    pub fn render(&self) -> String {
        let cols = self.grid.cols() as usize;
        let mut widths = vec![3usize; cols];
        for row in self.grid.iter_rows() {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.to_string().chars().count());
            }
        }
        let label_width = self.grid.rows().to_string().len();

        let mut out = String::new();
        let _ = write!(out, "{:>label_width$}", "");
        for (col, width) in widths.iter().copied().enumerate() {
            let letter = CellAddress::column_to_letters(col as u16);
            let _ = write!(out, " | {:<width$}", letter);
        }

        for (row, cells) in self.grid.iter_rows().enumerate() {
            let _ = write!(out, "\n{:>label_width$}", row + 1);
            for (cell, width) in cells.iter().zip(widths.iter().copied()) {
                let _ = write!(out, " | {:<width$}", cell.to_string());
            }
        }

        out
    }
}

fn parse_address(text: &str) -> Result<CellAddress> {
    if text.is_empty() {
        bail!("Expected a cell reference such as A1");
    }
    CellAddress::parse(text).with_context(|| format!("Unknown command or cell '{}'", text))
}

/// Usage and the list of available formulas
pub fn help_text(marker: char) -> String {
    let mut out = String::from("Available formulas\n");
    let _ = writeln!(out, "  Type formulas using {m}. Example: {m}2+2", m = marker);
    for function in AggregateFunction::ALL {
        let _ = writeln!(
            out,
            "  {}{}(A1:A3)  {}",
            marker,
            function.name(),
            function.description()
        );
    }
    out.push_str("Commands\n");
    out.push_str("  <CELL> <text>  commit text to a cell (e.g. A1 =SUM(B1:B3))\n");
    out.push_str("  get <CELL>     show one cell\n");
    out.push_str("  show           show the grid\n");
    out.push_str("  help           show this message\n");
    out.push_str("  quit           leave");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(GridSettings::default()).unwrap()
    }

    fn output(session: &mut Session, line: &str) -> String {
        match session.handle_line(line).unwrap() {
            Outcome::Output(text) => text,
            other => panic!("Expected output for '{}', got {:?}", line, other),
        }
    }

    #[test]
    fn test_commit_lines() {
        let mut session = session();

        assert_eq!(output(&mut session, "A1 1"), "A1 = 1");
        assert_eq!(output(&mut session, "A2 2"), "A2 = 2");
        assert_eq!(output(&mut session, "A3 =SUM(A1:A2)"), "A3 = 3");
        assert_eq!(output(&mut session, "B1 =1/0"), "B1 = Invalid Formula");
        assert_eq!(output(&mut session, "get A3"), "A3 = 3");
    }

    #[test]
    fn test_commit_keeps_text_verbatim() {
        let mut session = session();
        output(&mut session, "C2 hello  world ");

        let c2 = CellAddress::parse("C2").unwrap();
        assert_eq!(
            session.grid().get(c2).unwrap(),
            &CellValue::text("hello  world ")
        );
    }

    #[test]
    fn test_bare_reference_clears_cell() {
        let mut session = session();
        output(&mut session, "A1 5");
        assert_eq!(output(&mut session, "A1"), "A1 = ");

        let a1 = CellAddress::new(0, 0);
        assert!(session.grid().get(a1).unwrap().is_empty());
    }

    #[test]
    fn test_commands() {
        let mut session = session();

        assert_eq!(session.handle_line("").unwrap(), Outcome::Silent);
        assert_eq!(session.handle_line("   ").unwrap(), Outcome::Silent);
        assert_eq!(session.handle_line("quit").unwrap(), Outcome::Quit);
        assert!(output(&mut session, "help").contains("=SUM(A1:A3)"));
    }

    #[test]
    fn test_bad_lines() {
        let mut session = session();

        assert!(session.handle_line("frobnicate").is_err());
        assert!(session.handle_line("get").is_err());
        assert!(session.handle_line("A11 x").is_err());
        assert!(session.handle_line("F1 x").is_err());
        assert!(session.handle_line("a1 x").is_err());
    }

    #[test]
    fn test_render() {
        let settings = GridSettings {
            rows: 2,
            cols: 2,
            ..GridSettings::default()
        };
        let mut session = Session::new(settings).unwrap();
        output(&mut session, "A1 =2+2");
        output(&mut session, "B2 text");

        assert_eq!(
            session.render(),
            "  | A   | B   \n1 | 4   |     \n2 |     | text"
        );
    }

    #[test]
    fn test_help_uses_marker() {
        let help = help_text('#');
        assert!(help.contains("#2+2"));
        assert!(help.contains("#AVERAGE(A1:A3)  Finds average"));
    }
}
