//! Plot driver: one figure per dataset combination.

use crate::logfile::{filter_lines, parse_clock_records, read_log_file};
use crate::model::{DatasetSeries, build_figure, transpose};
use crate::plan::{DatasetName, Plan, image_path};
use crate::render::FigureSink;
use anyhow::Context;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// Fewer marked lines than this and the combination is not plotted.
pub const MIN_MARKED_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum PlotOutcome {
    Written(PathBuf),
    /// A dataset had too few marked lines; nothing was written.
    Skipped { dataset: DatasetName, matched: usize },
    /// The combination named no datasets.
    Empty,
}

pub struct PlotDriver<S: FigureSink> {
    logs_dir: PathBuf,
    out_dir: PathBuf,
    marker: String,
    next_figure: u32,
    sink: S,
}

impl<S: FigureSink> PlotDriver<S> {
    pub fn new(logs_dir: PathBuf, out_dir: PathBuf, marker: String, sink: S) -> Self {
        Self {
            logs_dir,
            out_dir,
            marker,
            next_figure: 1,
            sink,
        }
    }

    pub fn from_plan(plan: &Plan, sink: S) -> Self {
        Self::new(
            plan.logs_dir.clone(),
            plan.out_dir.clone(),
            plan.marker.clone(),
            sink,
        )
    }

    /// Number of plot calls made so far, skipped ones included.
    pub fn figures_started(&self) -> u32 {
        self.next_figure - 1
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Plot one combination of datasets onto a shared figure.
    ///
    /// Datasets are read in order. The first one with fewer than
    /// [`MIN_MARKED_LINES`] marked lines ends the call quietly; datasets after
    /// it are never opened. A missing log file, a malformed `<Clocks>` span or
    /// ragged records are errors.
    pub fn plot(&mut self, datasets: &[DatasetName]) -> anyhow::Result<PlotOutcome> {
        let number = self.next_figure;
        self.next_figure += 1;

        let mut series = Vec::with_capacity(datasets.len());
        for name in datasets {
            let path = name.log_path(&self.logs_dir);
            let text = read_log_file(&path)?;
            let marked = filter_lines(text.lines(), &self.marker);

            if marked.len() < MIN_MARKED_LINES {
                warn!(
                    "skipping figure {}: {} has {} line(s) containing {:?}, need {}",
                    number,
                    path.display(),
                    marked.len(),
                    self.marker,
                    MIN_MARKED_LINES
                );
                return Ok(PlotOutcome::Skipped {
                    dataset: name.clone(),
                    matched: marked.len(),
                });
            }

            let records = parse_clock_records(&path, &marked)?;
            let columns = transpose(&records)
                .with_context(|| format!("clock records of {} are ragged", path.display()))?;
            debug!(
                "{}: {} records, {} metrics",
                name,
                records.len(),
                columns.len()
            );

            series.push(DatasetSeries {
                name: name.clone(),
                columns,
            });
        }

        if series.is_empty() {
            return Ok(PlotOutcome::Empty);
        }

        let figure = build_figure(number, &series)?;
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("create output directory {}", self.out_dir.display()))?;
        let out = image_path(&self.out_dir, datasets);
        self.sink
            .save(&figure, &out)
            .with_context(|| format!("write figure {}", out.display()))?;
        info!("figure {} -> {}", number, out.display());

        Ok(PlotOutcome::Written(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClockParseError, LogFileNotFound, ShapeError};
    use crate::model::FigureData;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingSink {
        saved: Vec<(FigureData, PathBuf)>,
    }

    impl FigureSink for RecordingSink {
        fn save(&mut self, figure: &FigureData, path: &Path) -> anyhow::Result<()> {
            self.saved.push((figure.clone(), path.to_path_buf()));
            Ok(())
        }
    }

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir(dir.path().join("logs")).unwrap();
            Self { dir }
        }

        fn log(&self, name: &str, text: &str) {
            fs::write(self.dir.path().join("logs").join(format!("{name}.log")), text).unwrap();
        }

        fn out_dir(&self) -> PathBuf {
            self.dir.path().join("imgs")
        }

        fn driver(&self) -> PlotDriver<RecordingSink> {
            PlotDriver::new(
                self.dir.path().join("logs"),
                self.out_dir(),
                "Clock".to_string(),
                RecordingSink::default(),
            )
        }
    }

    fn names(list: &[&str]) -> Vec<DatasetName> {
        list.iter().map(|n| DatasetName::new(n).unwrap()).collect()
    }

    const THREE_RECORDS: &str = "\
start
Clock <Clocks>1,2,3</Clocks>
unrelated
Clock <Clocks>1,2,3</Clocks>
Clock <Clocks>1,2,3</Clocks>
";

    #[test]
    fn three_records_give_three_series() {
        let fx = Fixture::new();
        fx.log("tiny", THREE_RECORDS);
        let mut driver = fx.driver();

        let outcome = driver.plot(&names(&["tiny"])).unwrap();
        let expected_path = fx.out_dir().join("tiny.png");
        assert_eq!(outcome, PlotOutcome::Written(expected_path.clone()));

        let (figure, path) = &driver.sink().saved[0];
        assert_eq!(path, &expected_path);
        let mut series: Vec<(String, Vec<f64>)> = figure
            .panels
            .iter()
            .map(|p| (p.title.clone(), p.lines[0].values.clone()))
            .collect();
        series.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            series,
            vec![
                ("Core".to_string(), vec![2.0, 2.0, 2.0]),
                ("CoreCount".to_string(), vec![3.0, 3.0, 3.0]),
                ("Pid".to_string(), vec![1.0, 1.0, 1.0]),
            ]
        );
        assert!(fx.out_dir().is_dir());
    }

    #[test]
    fn single_marked_line_skips_without_output() {
        let fx = Fixture::new();
        fx.log("lonely", "noise\nClock <Clocks>1,2</Clocks>\n");
        let mut driver = fx.driver();

        let outcome = driver.plot(&names(&["lonely"])).unwrap();
        assert_eq!(
            outcome,
            PlotOutcome::Skipped {
                dataset: DatasetName::new("lonely").unwrap(),
                matched: 1
            }
        );
        assert!(driver.sink().saved.is_empty());
        assert!(!fx.out_dir().exists());
    }

    #[test]
    fn short_first_dataset_skips_before_reading_the_rest() {
        let fx = Fixture::new();
        fx.log("empty", "");
        let mut driver = fx.driver();

        let outcome = driver.plot(&names(&["empty", "never_written"])).unwrap();
        assert!(matches!(outcome, PlotOutcome::Skipped { matched: 0, .. }));
    }

    #[test]
    fn missing_log_file_is_an_error() {
        let fx = Fixture::new();
        fx.log("tiny", THREE_RECORDS);
        let mut driver = fx.driver();

        let err = driver.plot(&names(&["tiny", "absent"])).unwrap_err();
        let nf = err.downcast_ref::<LogFileNotFound>().unwrap();
        assert!(nf.path.ends_with("absent.log"));
        assert!(driver.sink().saved.is_empty());
    }

    #[test]
    fn marker_without_closing_tag_is_a_parse_error() {
        let fx = Fixture::new();
        fx.log("broken", "Clock <Clocks>1,2</Clocks>\nClock <Clocks>1,2\n");
        let mut driver = fx.driver();

        let err = driver.plot(&names(&["broken"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClockParseError>(),
            Some(ClockParseError::MissingEndTag)
        ));
    }

    #[test]
    fn ragged_records_are_a_shape_error() {
        let fx = Fixture::new();
        fx.log("ragged", "Clock <Clocks>1,2,3</Clocks>\nClock <Clocks>1,2</Clocks>\n");
        let mut driver = fx.driver();

        let err = driver.plot(&names(&["ragged"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShapeError>(),
            Some(&ShapeError {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn combination_shares_one_image_named_by_concatenation() {
        let fx = Fixture::new();
        fx.log("nulls", THREE_RECORDS);
        fx.log(
            "nulls_noL2",
            "Clock <Clocks>4,5,6</Clocks>\nClock <Clocks>7,8,9</Clocks>\n",
        );
        let mut driver = fx.driver();

        let outcome = driver.plot(&names(&["nulls_noL2", "nulls"])).unwrap();
        assert_eq!(
            outcome,
            PlotOutcome::Written(fx.out_dir().join("nulls_noL2nulls.png"))
        );

        let (figure, _) = &driver.sink().saved[0];
        assert_eq!(figure.panels.len(), 3);
        let pid = figure.panels.iter().find(|p| p.title == "Pid").unwrap();
        assert_eq!(pid.lines[0].label, "nulls_noL2");
        assert_eq!(pid.lines[0].values, vec![4.0, 7.0]);
        assert_eq!(pid.lines[1].label, "nulls");
        assert_ne!(pid.lines[0].style, pid.lines[1].style);
    }

    #[test]
    fn figure_numbers_advance_for_every_call() {
        let fx = Fixture::new();
        fx.log("tiny", THREE_RECORDS);
        fx.log("lonely", "Clock <Clocks>1</Clocks>\n");
        let mut driver = fx.driver();

        driver.plot(&names(&["lonely"])).unwrap();
        driver.plot(&names(&["tiny"])).unwrap();
        assert_eq!(driver.figures_started(), 2);
        assert_eq!(driver.sink().saved[0].0.number, 2);
    }

    #[test]
    fn empty_combination_writes_nothing() {
        let fx = Fixture::new();
        let mut driver = fx.driver();
        assert_eq!(driver.plot(&[]).unwrap(), PlotOutcome::Empty);
        assert!(driver.sink().saved.is_empty());
    }

    #[test]
    fn four_datasets_fail_at_plot_time() {
        let fx = Fixture::new();
        for n in ["a", "b", "c", "d"] {
            fx.log(n, THREE_RECORDS);
        }
        let mut driver = fx.driver();
        assert!(driver.plot(&names(&["a", "b", "c", "d"])).is_err());
        assert!(driver.sink().saved.is_empty());
    }
}
