use super::{GeometryRecord, GeometrySource};
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use tileshade_core::{Blob, GeoBBox};

/// Keeps all records in memory and returns every one of them for any query.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
	records: Vec<GeometryRecord>,
}

#[derive(Deserialize)]
struct CsvRow {
	id: String,
	value: Option<f64>,
	wkb: String,
}

impl MemorySource {
	pub fn new(records: Vec<GeometryRecord>) -> MemorySource {
		MemorySource { records }
	}

	pub fn push(&mut self, record: GeometryRecord) {
		self.records.push(record);
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[GeometryRecord] {
		&self.records
	}

	/// Reads `id,value,wkb` rows with a header line.
	///
	/// `wkb` is hex encoded, optionally prefixed with `\x` or `0x`. An empty `value`
	/// means the attribute is missing.
	pub fn from_csv_reader<R: Read>(reader: R) -> Result<MemorySource> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(true)
			.trim(csv::Trim::All)
			.from_reader(reader);

		let mut records = Vec::new();
		for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
			// header is line 1
			let line = index + 2;
			let row = row.with_context(|| format!("parsing csv line {line}"))?;
			let hex_text = row.wkb.trim_start_matches("\\x").trim_start_matches("0x");
			let bytes = hex::decode(hex_text).with_context(|| format!("decoding hex wkb of '{}' in line {line}", row.id))?;
			records.push(GeometryRecord::new(row.id, row.value, Blob::from(bytes)));
		}

		debug!("read {} records from csv", records.len());
		Ok(MemorySource::new(records))
	}

	pub fn from_csv_path(path: &Path) -> Result<MemorySource> {
		let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
		MemorySource::from_csv_reader(file).with_context(|| format!("reading {}", path.display()))
	}
}

impl GeometrySource for MemorySource {
	fn query(&self, _bbox: &GeoBBox) -> Result<Vec<GeometryRecord>> {
		Ok(self.records.clone())
	}

	fn source_type(&self) -> &str {
		"memory"
	}
}
