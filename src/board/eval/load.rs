use std::fs;
use std::path::Path;

use log::{debug, info};

use super::EvalTables;
use crate::board::EvalTableError;

const SQUARE_VALUES: usize = 6 * 64;

impl EvalTables {
    /// Parses a material file and a square-table file.
    ///
    /// The material file holds one row per piece type (pawn to king) and only
    /// the first field of each row is read. The square-table file holds 384
    /// integers, six tables of 64 from white's view, separated by commas or
    /// whitespace in any layout.
    pub fn parse(material: &str, squares: &str) -> Result<Self, EvalTableError> {
        Ok(EvalTables {
            material: parse_material(material)?,
            square: parse_squares(squares)?,
        })
    }

    /// Reads both table files from disk
    pub fn load(
        material_path: impl AsRef<Path>,
        square_table_path: impl AsRef<Path>,
    ) -> Result<Self, EvalTableError> {
        let material_path = material_path.as_ref();
        let square_table_path = square_table_path.as_ref();
        let material = read(material_path)?;
        let squares = read(square_table_path)?;
        let tables = EvalTables::parse(&material, &squares)?;
        info!(
            "loaded evaluation tables from {} and {}",
            material_path.display(),
            square_table_path.display()
        );
        Ok(tables)
    }
}

fn read(path: &Path) -> Result<String, EvalTableError> {
    fs::read_to_string(path).map_err(|err| EvalTableError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

fn parse_value(field: &str, line: usize) -> Result<i32, EvalTableError> {
    field.trim().parse().map_err(|_| EvalTableError::Parse {
        line,
        found: field.trim().to_string(),
    })
}

fn parse_material(text: &str) -> Result<[i32; 6], EvalTableError> {
    let mut values = Vec::with_capacity(6);
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            debug!("material table: skipping blank line {line_no}");
            continue;
        }
        let first = line.split(',').next().unwrap_or(line);
        values.push(parse_value(first, line_no)?);
    }
    values
        .as_slice()
        .try_into()
        .map_err(|_| EvalTableError::Shape {
            table: "material",
            expected: 6,
            found: values.len(),
        })
}

fn parse_squares(text: &str) -> Result<[[i32; 64]; 6], EvalTableError> {
    let mut values = Vec::with_capacity(SQUARE_VALUES);
    for (idx, line) in text.lines().enumerate() {
        let fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());
        for field in fields {
            values.push(parse_value(field, idx + 1)?);
        }
    }
    if values.len() != SQUARE_VALUES {
        return Err(EvalTableError::Shape {
            table: "square",
            expected: SQUARE_VALUES,
            found: values.len(),
        });
    }
    let mut tables = [[0; 64]; 6];
    for (table, chunk) in tables.iter_mut().zip(values.chunks_exact(64)) {
        table.copy_from_slice(chunk);
    }
    Ok(tables)
}
