//! Plot plans: which dataset combinations to render, from where, to where.
//!
//! JSON shape (everything but `combinations` optional):
//! {
//!   "logs_dir": "./logs",
//!   "out_dir": "imgs",
//!   "marker": "Clock",
//!   "combinations": [["nulls"], ["nulls_noL2", "nulls"]]
//! }
//!
//! Without a plan file the built-in list is used.

use crate::plan::DatasetName;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOGS_DIR: &str = "./logs";
pub const DEFAULT_OUT_DIR: &str = "imgs";
pub const DEFAULT_MARKER: &str = "Clock";

/// The combinations rendered by a bare invocation, in order.
pub const BUILTIN_COMBINATIONS: &[&[&str]] = &[
    &["nulls"],
    &["nulls_noL2"],
    &["nulls_noL2", "nulls"],
    &["bulksec"],
    &["bulksec_noL2"],
    &["bulksec_noL2", "bulksec"],
    &["bulktest"],
    &["cory"],
    &["funn"],
    &["printy"],
    &["shared"],
    &["sparmy"],
    &["sparmy_noL2", "sparmy"],
    &["sparmy_noL2"],
    &["spawny"],
    &["tiny"],
    &["tshared"],
];

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanSpec {
    #[serde(default)]
    pub logs_dir: Option<PathBuf>,

    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    #[serde(default)]
    pub marker: Option<String>,

    pub combinations: Vec<Vec<String>>,
}

/// Validated plan ready for the plot driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub logs_dir: PathBuf,
    pub out_dir: PathBuf,
    pub marker: String,
    pub combinations: Vec<Vec<DatasetName>>,
}

impl PlanSpec {
    pub fn builtin() -> Self {
        Self {
            logs_dir: None,
            out_dir: None,
            marker: None,
            combinations: BUILTIN_COMBINATIONS
                .iter()
                .map(|combo| combo.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read plan file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse plan file {}", path.display()))
    }

    /// Check names and marker, fill in default directories.
    pub fn validate_and_build(&self) -> anyhow::Result<Plan> {
        if self.combinations.is_empty() {
            bail!("plan contains no combinations");
        }

        let marker = self
            .marker
            .clone()
            .unwrap_or_else(|| DEFAULT_MARKER.to_string());
        if marker.is_empty() {
            bail!("plan marker must be non-empty");
        }

        let mut combinations = Vec::with_capacity(self.combinations.len());
        for (i, combo) in self.combinations.iter().enumerate() {
            if combo.is_empty() {
                bail!("plan combination #{} is empty", i + 1);
            }
            let names = combo
                .iter()
                .map(|name| DatasetName::new(name))
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("plan combination #{}", i + 1))?;
            combinations.push(names);
        }

        Ok(Plan {
            logs_dir: self
                .logs_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGS_DIR)),
            out_dir: self
                .out_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            marker,
            combinations,
        })
    }
}
