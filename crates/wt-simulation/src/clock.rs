/// Tracks simulation time: a monotonic tick counter and the fixed step
/// duration handed to systems as `dt`.
#[derive(Debug, Clone)]
pub struct SimClock {
    tick: u64,
    dt: f64,
}

impl SimClock {
    /// Create a new clock at tick 0.
    pub fn new(dt: f64) -> Self {
        Self { tick: 0, dt }
    }

    /// Create a clock positioned at an arbitrary tick.
    pub fn starting_at(tick: u64, dt: f64) -> Self {
        Self { tick, dt }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Step duration passed through to systems.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Total elapsed time, `tick * dt`.
    pub fn elapsed(&self) -> f64 {
        self.tick as f64 * self.dt
    }
}
