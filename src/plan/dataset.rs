//! Dataset names.
//!
//! A dataset is a log file stem under the logs directory:
//! "sparmy_noL2"  =>  ./logs/sparmy_noL2.log

use anyhow::bail;
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};

const DATASET_NAME_RE: &str = r"^[A-Za-z0-9_.+-]+$";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetName(String);

impl DatasetName {
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let re = Regex::new(DATASET_NAME_RE)?;
        if !re.is_match(name) || name == "." || name == ".." {
            bail!("invalid dataset name {:?}: expected a plain file stem", name);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn log_path(&self, logs_dir: &Path) -> PathBuf {
        logs_dir.join(format!("{}.log", self.0))
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output image path for a combination: the names concatenated, as PNG.
pub fn image_path(out_dir: &Path, datasets: &[DatasetName]) -> PathBuf {
    let stem: String = datasets.iter().map(DatasetName::as_str).collect();
    out_dir.join(format!("{}.png", stem))
}
