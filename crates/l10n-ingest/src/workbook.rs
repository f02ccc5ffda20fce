//! Binary workbook decoding (xlsx, xlsm, xlsb, xls, ods).

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::error::{IngestError, Result};
use crate::grid::RawGrid;

/// Renders one cell the way it is shown to the mapping step.
///
/// Blank cells become `""`; integral floats drop their fractional part.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

/// Reads the first worksheet of a workbook into a raw grid.
///
/// `name` is only used for error messages. The grid starts at the top-left
/// corner of the sheet's used range, so a table placed at `B2` reads the
/// same as one placed at `A1`.
pub fn read_first_sheet(name: &str, bytes: &[u8]) -> Result<RawGrid> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| IngestError::Workbook {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoSheets {
            name: name.to_string(),
        });
    };
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Workbook {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(sheet = %sheet, start = ?range.start(), "reading first worksheet");

    let mut grid = RawGrid::default();
    for row in range.rows() {
        grid.push(row.iter().map(cell_to_string).collect());
    }
    Ok(grid)
}
