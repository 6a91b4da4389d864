//!
//! The rendered report table.
//!

use crate::config::Config;
use crate::util;

use super::contract::ContractReport;
use super::status::Status;

///
/// A single rendered table line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The line text, without a trailing newline or colors.
    pub text: String,
    /// The status of the row, `None` for borders and the header.
    pub status: Option<Status>,
    /// Whether the line is the header row.
    pub is_header: bool,
}

///
/// The column alignment.
///
#[derive(Debug, Clone, Copy)]
enum Alignment {
    /// Padded on the right.
    Left,
    /// Padded on the left.
    Right,
}

///
/// The rendered report table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The header cells.
    header: Vec<String>,
    /// The row cells with their statuses.
    rows: Vec<(Status, Vec<String>)>,
}

impl Table {
    /// The column headers.
    pub const HEADER: [&'static str; 5] = [
        "Source path",
        "Bytecode",
        "Deployed bytecode",
        "Capacity",
        "Message",
    ];

    /// The column alignments.
    const ALIGNMENTS: [Alignment; 5] = [
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Right,
        Alignment::Left,
    ];

    ///
    /// Formats the contract rows into table cells.
    ///
    pub fn new(contracts: &[ContractReport], config: &Config) -> Self {
        let rows = contracts
            .iter()
            .map(|contract| {
                (
                    contract.status,
                    vec![
                        contract.source_path.clone(),
                        util::format_thousands(contract.bytecode_length),
                        util::format_thousands(contract.deployed_bytecode_length),
                        format!("{}%", contract.capacity_percent),
                        contract.status.message(config).to_owned(),
                    ],
                )
            })
            .collect();
        Self {
            header: Self::HEADER.iter().map(|cell| cell.to_string()).collect(),
            rows,
        }
    }

    ///
    /// Whether the table has no rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Returns the number of rows, excluding the header.
    ///
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    ///
    /// Returns the row cells in order.
    ///
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|(_, cells)| cells.as_slice())
    }

    ///
    /// Renders the table into lines.
    ///
    pub fn lines(&self) -> Vec<Line> {
        let widths = self.widths();

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(Self::border(&widths, '┌', '┬', '┐'));
        lines.push(Line {
            text: Self::row(&self.header, &widths),
            status: None,
            is_header: true,
        });
        lines.push(Self::border(&widths, '├', '┼', '┤'));
        for (status, cells) in self.rows.iter() {
            lines.push(Line {
                text: Self::row(cells, &widths),
                status: Some(*status),
                is_header: false,
            });
        }
        lines.push(Self::border(&widths, '└', '┴', '┘'));
        lines
    }

    ///
    /// Computes the column widths in characters.
    ///
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| cell.chars().count())
            .collect();
        for (_, cells) in self.rows.iter() {
            for (width, cell) in widths.iter_mut().zip(cells.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    ///
    /// Renders a border line.
    ///
    fn border(widths: &[usize], left: char, middle: char, right: char) -> Line {
        let mut text = String::new();
        text.push(left);
        for (index, width) in widths.iter().enumerate() {
            if index > 0 {
                text.push(middle);
            }
            text.push_str("─".repeat(width + 2).as_str());
        }
        text.push(right);
        Line {
            text,
            status: None,
            is_header: false,
        }
    }

    ///
    /// Renders a row of cells.
    ///
    fn row(cells: &[String], widths: &[usize]) -> String {
        let mut text = String::from("│");
        for ((cell, width), alignment) in cells.iter().zip(widths).zip(Self::ALIGNMENTS) {
            let padding = " ".repeat(width - cell.chars().count());
            match alignment {
                Alignment::Left => text.push_str(format!(" {cell}{padding} │").as_str()),
                Alignment::Right => text.push_str(format!(" {padding}{cell} │").as_str()),
            }
        }
        text
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
