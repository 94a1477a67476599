use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time in seconds, or invalid.
///
/// The frame never interprets the value, it is only carried along and copied.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Timestamp(Option<f64>);

impl Timestamp {
    pub const INVALID: Self = Timestamp(None);

    pub const fn new(seconds: f64) -> Self {
        Timestamp(Some(seconds))
    }

    /// Seconds since the Unix epoch.
    pub fn now() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64());
        Timestamp(Some(seconds))
    }

    pub const fn is_valid(self) -> bool {
        self.0.is_some()
    }

    pub const fn seconds(self) -> Option<f64> {
        self.0
    }

    pub fn to_invalid(&mut self) {
        self.0 = None;
    }
}

impl From<f64> for Timestamp {
    fn from(seconds: f64) -> Self {
        Timestamp::new(seconds)
    }
}
