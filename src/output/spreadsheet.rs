//! Excel (.xlsx) report
//!
//! Rows are collected as a plain grid while the tree is walked and rendered
//! into a single-worksheet workbook on `finish`.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::error::{ReportError, Result};
use crate::tree::ChildRecord;

use super::report::{DirectoryBlock, ReportHeader, ReportSink};
use super::utils::{
    EMPTY_DIRECTORY_MARKER, NAME_HEADING, SIZE_HEADING, TYPE_HEADING, UNIT_HEADING,
};

const SHEET_NAME: &str = "Directory Tree";
const COLUMN_WIDTHS: [f64; 4] = [15.0, 60.0, 12.0, 10.0];

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

/// One worksheet row. An empty row is a spacer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    pub cells: Vec<Cell>,
    pub bold: bool,
}

impl SheetRow {
    fn plain(cells: Vec<Cell>) -> Self {
        Self { cells, bold: false }
    }

    fn bold(cells: Vec<Cell>) -> Self {
        Self { cells, bold: true }
    }

    fn spacer() -> Self {
        Self::default()
    }
}

/// Spreadsheet report sink saving to `destination`.
#[derive(Debug)]
pub struct SpreadsheetReport {
    destination: PathBuf,
    rows: Vec<SheetRow>,
}

impl SpreadsheetReport {
    pub fn new(destination: &Path) -> Self {
        Self {
            destination: destination.to_path_buf(),
            rows: Vec::new(),
        }
    }

    /// Rows collected so far.
    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    fn child_row(child: &ChildRecord) -> SheetRow {
        match child {
            ChildRecord::Directory { name } => {
                SheetRow::plain(vec![Cell::text(child.kind_label()), Cell::text(name)])
            }
            ChildRecord::File { name, size, .. } => SheetRow::plain(vec![
                Cell::text(child.kind_label()),
                Cell::text(name),
                Cell::Number(size.value),
                Cell::text(size.unit.label()),
            ]),
        }
    }

    fn fill_worksheet(&self, worksheet: &mut Worksheet) -> std::result::Result<(), XlsxError> {
        let bold = Format::new().set_bold();
        let size_format = Format::new().set_num_format("0.00");

        worksheet.set_name(SHEET_NAME)?;
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let row_num = u32::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, cell) in row.cells.iter().enumerate() {
                let col = col as u16;
                match (cell, row.bold) {
                    (Cell::Text(text), true) => {
                        worksheet.write_string_with_format(row_num, col, text, &bold)?;
                    }
                    (Cell::Text(text), false) => {
                        worksheet.write_string(row_num, col, text)?;
                    }
                    (Cell::Number(value), _) => {
                        worksheet.write_number_with_format(row_num, col, *value, &size_format)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl ReportSink for SpreadsheetReport {
    fn write_header(&mut self, header: &ReportHeader) -> Result<()> {
        let identity = &header.identity;
        for line in [
            identity.title.clone(),
            identity.version.clone(),
            format!("Created by {}", identity.author),
            identity.website.clone(),
            identity.email.clone(),
        ] {
            self.rows.push(SheetRow::plain(vec![Cell::Text(line)]));
        }
        self.rows.push(SheetRow::spacer());

        self.rows.push(SheetRow::plain(vec![
            Cell::text("Directory:"),
            Cell::Text(header.root_display()),
        ]));
        self.rows.push(SheetRow::plain(vec![
            Cell::text("Creation Time:"),
            Cell::Text(header.timestamp()),
        ]));
        self.rows.push(SheetRow::spacer());

        self.rows.push(SheetRow::bold(vec![
            Cell::text(TYPE_HEADING),
            Cell::text(NAME_HEADING),
            Cell::text(SIZE_HEADING),
            Cell::text(UNIT_HEADING),
        ]));
        Ok(())
    }

    fn write_directory(&mut self, block: &DirectoryBlock<'_>) -> Result<()> {
        self.rows.push(SheetRow::spacer());
        self.rows
            .push(SheetRow::bold(vec![Cell::Text(block.path.display().to_string())]));

        if block.listing.is_empty() {
            self.rows
                .push(SheetRow::plain(vec![Cell::text(EMPTY_DIRECTORY_MARKER)]));
        } else {
            self.rows
                .extend(block.listing.children().iter().map(Self::child_row));
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let workbook_error = |source| ReportError::Workbook {
            path: self.destination.clone(),
            source,
        };

        self.fill_worksheet(worksheet).map_err(workbook_error)?;
        workbook.save(&self.destination).map_err(workbook_error)
    }
}
