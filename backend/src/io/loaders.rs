use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::error::{LoadError, LoadResult};
use crate::db::checksum::calculate_checksum;
use crate::models::{Category, VideoRecord, VideoTable};

/// Columns every category dataset must expose.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "title",
    "description",
    "publishedDate",
    "channelName",
    "views",
    "duration",
    "isShort",
];



/// Result of loading one category dataset.
#[derive(Debug, Clone)]
pub struct DatasetLoadResult {
    pub category: Category,
    pub table: VideoTable,
    pub source: PathBuf,
    /// SHA-256 of the raw file bytes.
    pub checksum: String,
    pub num_rows: usize,
}

/// Loader for the category CSV files.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a category dataset from a CSV file.
    pub fn load_from_file(category: Category, path: &Path) -> LoadResult<DatasetLoadResult> {
        if !path.exists() {
            return Err(LoadError::Missing(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let checksum = calculate_checksum(&bytes);
        let table = Self::load_from_bytes(bytes)?;
        let num_rows = table.len();

        log::info!(
            "Loaded {} {} videos from {}",
            num_rows,
            category,
            path.display()
        );

        Ok(DatasetLoadResult {
            category,
            table,
            source: path.to_path_buf(),
            checksum,
            num_rows,
        })
    }

    /// Load a dataset from CSV text.
    pub fn load_from_str(csv: &str) -> LoadResult<VideoTable> {
        Self::load_from_bytes(csv.as_bytes().to_vec())
    }

    fn load_from_bytes(bytes: Vec<u8>) -> LoadResult<VideoTable> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        dataframe_to_table(df)
    }
}

/// Convert a raw CSV DataFrame into a typed table.
///
/// Column types are normalized first since inference may read numeric
/// columns as floats or strings depending on the file contents.
pub fn dataframe_to_table(df: DataFrame) -> LoadResult<VideoTable> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    // Counts are parsed from text so a fractional value is rejected, not truncated
    let casts: Vec<Expr> = REQUIRED_COLUMNS
        .iter()
        .map(|name| col(*name).cast(DataType::String))
        .collect();

    let df = df.lazy().with_columns(casts).collect()?;

    let titles = df.column("title")?.str()?;
    let descriptions = df.column("description")?.str()?;
    let published = df.column("publishedDate")?.str()?;
    let channels = df.column("channelName")?.str()?;
    let shorts = df.column("isShort")?.str()?;
    let views = df.column("views")?.str()?;
    let durations = df.column("duration")?.str()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let raw_date = published
            .get(i)
            .ok_or_else(|| LoadError::malformed(i, "publishedDate", "missing value"))?;
        let published_date = parse_published_date(raw_date).ok_or_else(|| {
            LoadError::malformed(i, "publishedDate", format!("unparseable date '{}'", raw_date))
        })?;

        let channel_name = channels
            .get(i)
            .ok_or_else(|| LoadError::malformed(i, "channelName", "missing value"))?
            .to_string();

        let is_short = match shorts.get(i) {
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                LoadError::malformed(i, "isShort", format!("not a boolean '{}'", raw))
            })?,
            None => return Err(LoadError::malformed(i, "isShort", "missing value")),
        };

        records.push(VideoRecord {
            title: titles.get(i).unwrap_or_default().to_string(),
            description: descriptions.get(i).unwrap_or_default().to_string(),
            published_date,
            channel_name,
            views: non_negative(views.get(i), i, "views")?,
            duration: non_negative(durations.get(i), i, "duration")?,
            is_short,
        });
    }

    Ok(VideoTable::new(records))
}

/// Parse a non-negative whole count. Float notation is accepted only
/// without a fractional part (`10.0`, not `10.7`).
fn non_negative(value: Option<&str>, row: usize, column: &str) -> LoadResult<u64> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| LoadError::malformed(row, column, "missing value"))?;

    if let Ok(count) = raw.parse::<u64>() {
        return Ok(count);
    }
    if let Ok(signed) = raw.parse::<i64>() {
        return Err(LoadError::malformed(
            row,
            column,
            format!("negative value {}", signed),
        ));
    }

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v < 0.0 => Err(LoadError::malformed(
            row,
            column,
            format!("negative value {}", raw),
        )),
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v <= u64::MAX as f64 => Ok(v as u64),
        Ok(_) => Err(LoadError::malformed(
            row,
            column,
            format!("not a whole number '{}'", raw),
        )),
        Err(_) => Err(LoadError::malformed(
            row,
            column,
            format!("not a number '{}'", raw),
        )),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a publication timestamp and keep only its calendar date.
///
/// Offsets are honored: the date is the one local to the timestamp's own
/// offset, not converted to UTC.
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.date_naive());
        }
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
