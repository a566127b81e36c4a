use std::fmt;
use std::time::Duration;

/// Summary of per-puzzle solve times, in microseconds.
pub struct Statistics {
    mean: f64,
    min: f64,
    max: f64,
    std_dev: f64,
}

impl Statistics {
    pub fn from_durations(durations: &[Duration]) -> Option<Statistics> {
        if durations.is_empty() {
            return None;
        }
        let micros: Vec<f64> = durations
            .iter()
            .map(|d| d.as_secs_f64() * 1e6)
            .collect();
        let n = micros.len() as f64;
        let mean = micros.iter().sum::<f64>() / n;
        let min = micros.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = micros.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let std_dev =
            (micros.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
        Some(Statistics {
            mean,
            min,
            max,
            std_dev,
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg: {:.2}(+/-{:.2})us, min: {:.2}us, max: {:.2}us",
            self.mean, self.std_dev, self.min, self.max
        )
    }
}
