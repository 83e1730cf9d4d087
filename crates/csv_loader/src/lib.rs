//! Reads delimited files back into memory for downstream analysis. No
//! transformation happens here; cells stay strings.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
	#[error("Unrecognized dataset name: {name}, the only names are 'games' and 'plays'")]
	UnknownDataset { name: String },

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl LoaderError {
	pub fn unknown_dataset_error(name: &str) -> Self {
		LoaderError::UnknownDataset { name: name.to_string() }
	}
}

/// In-memory tabular data: a header row plus string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
	headers: Vec<String>,
	rows: Vec<Vec<String>>,
}

impl DataTable {
	pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
		DataTable { headers, rows }
	}

	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	pub fn rows(&self) -> &[Vec<String>] {
		&self.rows
	}

	/// Number of data rows, the header not included.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// All cells of a named column, or `None` when the header is unknown.
	pub fn column(&self, name: &str) -> Option<Vec<&str>> {
		let index = self.headers.iter().position(|header| header == name)?;
		Some(self.rows.iter().map(|row| row.get(index).map_or("", String::as_str)).collect())
	}
}

/// Loads a CSV file; the first record becomes the header row.
pub fn load_table(path: &Path) -> Result<DataTable, LoaderError> {
	let mut reader = csv::Reader::from_path(path)?;

	let headers = reader.headers()?.iter().map(str::to_string).collect();
	let mut rows = Vec::new();
	for record in reader.records() {
		let record = record?;
		rows.push(record.iter().map(str::to_string).collect());
	}

	Ok(DataTable::new(headers, rows))
}

/// The two well-known outputs of a scrape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
	Games,
	Plays,
}

impl Dataset {
	pub fn file_name(self) -> &'static str {
		match self {
			Dataset::Games => "games.csv",
			Dataset::Plays => "plays.csv",
		}
	}

	pub fn path(self, data_dir: &Path) -> PathBuf {
		data_dir.join(self.file_name())
	}

	pub fn load(self, data_dir: &Path) -> Result<DataTable, LoaderError> {
		load_table(&self.path(data_dir))
	}
}

impl FromStr for Dataset {
	type Err = LoaderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"games" => Ok(Dataset::Games),
			"plays" => Ok(Dataset::Plays),
			_ => Err(LoaderError::unknown_dataset_error(s)),
		}
	}
}
