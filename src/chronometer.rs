use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> String {
        format_duration(self.start.elapsed())
    }
}

impl Default for Chronometer {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats as `mm:ss.mmm`.
fn format_duration(duration: Duration) -> String {
    let elapsed = duration.as_millis();
    format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
}

#[cfg(test)]
mod tests {
    use super::format_duration;
    use std::time::Duration;

    #[test]
    fn format() {
        assert_eq!(format_duration(Duration::ZERO), "00:00.000");
        assert_eq!(format_duration(Duration::from_millis(61_005)), "01:01.005");
        assert_eq!(format_duration(Duration::from_secs(3600)), "60:00.000");
    }
}
