use embassy_time::Duration;

/// Tunable timings for the controller.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChatpadConfig {
    /// How long Space must be held before it promotes to its hold action.
    pub hold_timeout: Duration,
    /// Interval between keep-alive writes; the pad goes to sleep without
    /// them.
    pub keep_alive_interval: Duration,
}

impl Default for ChatpadConfig {
    fn default() -> Self {
        Self {
            hold_timeout: Duration::from_millis(175),
            keep_alive_interval: Duration::from_secs(1),
        }
    }
}
