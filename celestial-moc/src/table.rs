//! Catalog tables as a source of coordinates.
//!
//! Binning a catalog only needs two named numeric columns and the row count,
//! captured by [`CatalogTable`]. [`ColumnTable`] is the in-memory
//! implementation, loadable from comma-separated text where lines starting
//! with `#` are metadata (ECSV style) and the first other line is the header.

use crate::binning::bin_by_size;
use crate::levels::Level;
use crate::projection::Coordinate;
use celestial_core::{AngularInput, AstroError, AstroResult};
use std::collections::HashMap;
use std::io::BufRead;
use tracing::debug;

/// Read-only access to named numeric columns.
pub trait CatalogTable {
    fn num_rows(&self) -> usize;

    fn column(&self, name: &str) -> Option<&[f64]>;
}

/// Columns of `f64` keyed by name, all of the same length.
#[derive(Clone, Debug, Default)]
pub struct ColumnTable {
    rows: usize,
    columns: HashMap<String, Vec<f64>>,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column; the first column fixes the row count.
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> AstroResult<Self> {
        if !self.columns.is_empty() && values.len() != self.rows {
            return Err(AstroError::invalid_argument(
                "ColumnTable::with_column",
                &format!(
                    "column '{}' has {} rows, table has {}",
                    name,
                    values.len(),
                    self.rows
                ),
            ));
        }
        self.rows = values.len();
        self.columns.insert(name.to_string(), values);
        Ok(self)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Reads `wanted` columns from comma-separated text.
    ///
    /// Other columns are ignored and may hold anything. Every value in a
    /// wanted column must parse as a float.
    pub fn from_csv<R: BufRead>(mut reader: R, wanted: &[&str]) -> AstroResult<Self> {
        let (header, mut line_no) = read_header(&mut reader)?;
        let mut col_map: HashMap<&str, usize> = HashMap::new();
        for (idx, col) in header.trim().split(',').enumerate() {
            col_map.insert(col.trim(), idx);
        }
        let indices = wanted
            .iter()
            .map(|name| require_column(&col_map, name))
            .collect::<AstroResult<Vec<usize>>>()?;

        let mut values: Vec<Vec<f64>> = vec![Vec::new(); wanted.len()];
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            line_no += 1;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.trim().split(',').collect();
            for (k, &idx) in indices.iter().enumerate() {
                let v = parse_field(fields.get(idx).copied(), wanted[k], line_no)?;
                values[k].push(v);
            }
        }

        let mut table = ColumnTable::new();
        for (name, column) in wanted.iter().zip(values) {
            table = table.with_column(name, column)?;
        }
        debug!(rows = table.rows, columns = wanted.len(), "loaded CSV table");
        Ok(table)
    }
}

impl CatalogTable for ColumnTable {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}

/// First non-comment, non-blank line and its 1-based line number.
fn read_header<R: BufRead>(reader: &mut R) -> AstroResult<(String, usize)> {
    let mut line = String::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(AstroError::data_error("CSV", "read header", "EOF before finding header"));
        }
        line_no += 1;
        if !line.starts_with('#') && !line.trim().is_empty() {
            return Ok((line, line_no));
        }
    }
}

fn require_column(col_map: &HashMap<&str, usize>, name: &str) -> AstroResult<usize> {
    col_map.get(name).copied().ok_or_else(|| {
        AstroError::invalid_argument("ColumnTable::from_csv", &format!("Missing column: {}", name))
    })
}

fn parse_field(s: Option<&str>, column: &str, line_no: usize) -> AstroResult<f64> {
    let raw = s.map(str::trim).unwrap_or("");
    raw.parse::<f64>().map_err(|_| {
        AstroError::data_error(
            "CSV",
            "parse",
            &format!("line {}: column '{}' value '{}' is not a number", line_no, column, raw),
        )
    })
}

/// Bin the positions held in two columns of `table`.
///
/// See [`bin_by_size`] for the meaning of `radius`, `unique` and `truncate`.
///
/// # Errors
///
/// [`AstroError::InvalidArgument`] if either column is missing, plus any
/// error from [`bin_by_size`].
pub fn bin_table<T: CatalogTable + ?Sized>(
    table: &T,
    ra_column: &str,
    dec_column: &str,
    radius: impl Into<AngularInput>,
    unique: bool,
    truncate: bool,
) -> AstroResult<(Vec<Coordinate>, Level)> {
    let lookup = |name: &str| {
        table.column(name).ok_or_else(|| {
            AstroError::invalid_argument("bin_table", &format!("table has no column '{}'", name))
        })
    };
    let ra = lookup(ra_column)?;
    let dec = lookup(dec_column)?;
    debug!(rows = table.num_rows(), ra_column, dec_column, "binning catalog table");
    bin_by_size(ra, dec, radius, unique, truncate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::angle::arcsec;

    const SAMPLE: &str = "\
# %ECSV 1.0
# datatype: [ra, dec]
source_id,ra,dec,name
1,10.0,20.0,alpha
2,10.0001,20.0001,beta

3,200.5,-30.25,gamma
";

    #[test]
    fn test_from_csv_reads_wanted_columns() {
        let table = ColumnTable::from_csv(SAMPLE.as_bytes(), &["ra", "dec"]).unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column("ra").unwrap(), &[10.0, 10.0001, 200.5]);
        assert_eq!(table.column("dec").unwrap(), &[20.0, 20.0001, -30.25]);
        assert!(table.column("name").is_none());
    }

    #[test]
    fn test_from_csv_missing_column() {
        let err = ColumnTable::from_csv(SAMPLE.as_bytes(), &["ra", "de"]).unwrap_err();
        assert!(matches!(err, AstroError::InvalidArgument { .. }));
    }

    #[test]
    fn test_from_csv_bad_value() {
        let err = ColumnTable::from_csv(SAMPLE.as_bytes(), &["name"]).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_from_csv_empty_input() {
        let err = ColumnTable::from_csv("# only metadata\n".as_bytes(), &["ra"]).unwrap_err();
        assert!(matches!(err, AstroError::DataError { .. }));
    }

    #[test]
    fn test_with_column_length_check() {
        let table = ColumnTable::new()
            .with_column("ra", vec![1.0, 2.0])
            .unwrap();
        assert!(table.clone().with_column("dec", vec![1.0]).is_err());
        let table = table.with_column("dec", vec![3.0, 4.0]).unwrap();
        let mut names: Vec<&str> = table.column_names().collect();
        names.sort();
        assert_eq!(names, vec!["dec", "ra"]);
    }

    #[test]
    fn test_bin_table() {
        let table = ColumnTable::from_csv(SAMPLE.as_bytes(), &["ra", "dec"]).unwrap();
        let (binned, level) = bin_table(&table, "ra", "dec", 1.0, true, false).unwrap();
        assert_eq!(level.get(), 6);
        assert_eq!(binned.len(), 2);

        let (all, _) = bin_table(&table, "ra", "dec", arcsec(1.0), false, false).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_bin_table_missing_column() {
        let table = ColumnTable::new().with_column("ra", vec![1.0]).unwrap();
        let err = bin_table(&table, "ra", "dec", 1.0, false, false).unwrap_err();
        assert!(matches!(err, AstroError::InvalidArgument { .. }));
    }
}
