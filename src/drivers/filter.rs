//! Dirt filter capacity sensor (simulated).

/// Remaining filter capacity, kept within 0–100 %.
pub struct FilterSensor {
    capacity_percent: f32,
}

impl FilterSensor {
    /// A freshly cleaned filter.
    pub fn new() -> Self {
        Self {
            capacity_percent: 100.0,
        }
    }

    pub fn with_capacity(capacity_percent: f32) -> Self {
        let mut sensor = Self::new();
        sensor.set_capacity(capacity_percent);
        sensor
    }

    pub fn set_capacity(&mut self, capacity_percent: f32) {
        self.capacity_percent = capacity_percent.clamp(0.0, 100.0);
    }

    /// Restore full capacity after cleaning.
    pub fn clean(&mut self) {
        self.capacity_percent = 100.0;
    }

    pub fn read(&self) -> f32 {
        self.capacity_percent
    }
}

impl Default for FilterSensor {
    fn default() -> Self {
        Self::new()
    }
}
