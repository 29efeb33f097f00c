//! Commutation-edge speed estimation
//!
//! Counts control-loop ticks between successive entries into sector 1 and
//! latches the count as a period-based speed proxy (one latch per electrical
//! revolution). The value is in ticks, so it is independent of wall-clock
//! jitter in the control loop.

pub struct SpeedEstimator {
    /// Ticks since the last entry into the reference sector
    tick_count: u32,
    /// Last latched ticks-per-electrical-revolution (0 until first latch)
    period_ticks: u32,
}

/// Reference sector for the once-per-revolution latch.
const REFERENCE_SECTOR: u8 = 1;

impl SpeedEstimator {
    pub const fn new() -> Self {
        Self {
            tick_count: 0,
            period_ticks: 0,
        }
    }

    /// Observe one control tick with the previous and current sector.
    ///
    /// On a transition into the reference sector the running count is
    /// latched and restarted; the tick itself is then counted, so N ticks
    /// between two entries latch exactly N. Staying in the reference sector
    /// does not re-latch.
    pub fn update(&mut self, last_sector: u8, sector: u8) {
        if last_sector != REFERENCE_SECTOR && sector == REFERENCE_SECTOR {
            self.period_ticks = self.tick_count;
            self.tick_count = 0;
        }
        self.tick_count += 1;
    }

    /// Last latched ticks-per-electrical-revolution.
    pub fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.tick_count = 0;
        self.period_ticks = 0;
    }
}
