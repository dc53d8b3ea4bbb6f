// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Puzzle input loading. Inputs are private, so they are read at runtime
//! from `data/day<N>.txt` (or `dev_data/` for development inputs) instead of
//! being baked into the binary.

use std::path::{Path, PathBuf};


const DEFAULT_DIR: &str = "data";
const DEVEL_DIR: &str = "dev_data";

#[derive(Debug, thiserror::Error)]
pub(crate) enum DataError {
	#[error("no input file at {}", path.display())]
	Missing { path: PathBuf },
	#[error("failed to read {}: {source}", path.display())]
	Io { path: PathBuf, #[source] source: std::io::Error },
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DataDir(PathBuf);

impl DataDir {
	pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
		Self(dir.into())
	}

	/// Picks the directory from `AOC_DATA_DIR`, then `AOC_DEVEL` (or the
	/// `devel` flag), falling back to `data/`.
	pub(crate) fn from_env(devel: bool) -> Self {
		Self::from_lookup(devel, |key| std::env::var(key).ok())
	}

	fn from_lookup(devel: bool, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(dir) = lookup("AOC_DATA_DIR").filter(|d| !d.is_empty()) {
			return Self::new(dir)
		}
		if devel || lookup("AOC_DEVEL").is_some_and(|v| !v.is_empty()) {
			Self::new(DEVEL_DIR)
		} else {
			Self::new(DEFAULT_DIR)
		}
	}

	pub(crate) fn dir(&self) -> &Path {
		&self.0
	}

	pub(crate) fn path(&self, day: u8) -> PathBuf {
		self.0.join(format!("day{day}.txt"))
	}

	pub(crate) fn read(&self, day: u8) -> Result<String, DataError> {
		let path = self.path(day);
		tracing::debug!(path = %path.display(), "reading input");
		std::fs::read_to_string(&path).map_err(|source| match source.kind() {
			std::io::ErrorKind::NotFound => DataError::Missing { path },
			_ => DataError::Io { path, source },
		})
	}
}


#[test]
fn tests() {
	let lookup = |pairs: &'static [(&'static str, &'static str)]| move |key: &str|
		pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string());

	assert_eq!(DataDir::from_lookup(false, lookup(&[])).dir(), Path::new("data"));
	assert_eq!(DataDir::from_lookup(true, lookup(&[])).dir(), Path::new("dev_data"));
	assert_eq!(DataDir::from_lookup(false, lookup(&[("AOC_DEVEL", "1")])).dir(), Path::new("dev_data"));
	assert_eq!(DataDir::from_lookup(false, lookup(&[("AOC_DEVEL", "")])).dir(), Path::new("data"));
	assert_eq!(DataDir::from_lookup(true, lookup(&[("AOC_DATA_DIR", "inputs")])).dir(), Path::new("inputs"));
	assert_eq!(DataDir::new("data").path(7), Path::new("data").join("day7.txt"));

	let dir = std::env::temp_dir().join(format!("advent21-data-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	std::fs::write(dir.join("day3.txt"), "101\n010\n").unwrap();
	let data_dir = DataDir::new(&dir);
	assert_eq!(data_dir.read(3).unwrap(), "101\n010\n");
	assert!(matches!(data_dir.read(4), Err(DataError::Missing { .. })));
	std::fs::remove_dir_all(&dir).unwrap();
}
