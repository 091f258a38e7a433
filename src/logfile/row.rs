/// One parsed `<Clocks>` row: the numeric samples of a single log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockRecord(pub Vec<f64>);

impl ClockRecord {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }
}
