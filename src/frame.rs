/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator of simulated frames with a fixed delta.
/// Optionally every Nth frame takes a longer stall delta instead.
/// Use with `take`: `for frame in FixedStepFrames::new(0.016).take(60) { ... }`
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    delta: f32,
    stall: Option<(u64, f32)>,
    frame_number: u64,
    time: f32,
}

impl FixedStepFrames {
    pub fn new(delta: f32) -> Self {
        Self {
            delta,
            stall: None,
            frame_number: 0,
            time: 0.0,
        }
    }

    /// Replace the delta of every `every`-th frame with `stall_delta`
    pub fn with_stalls(mut self, every: u64, stall_delta: f32) -> Self {
        if every > 0 {
            self.stall = Some((every, stall_delta));
        }
        self
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = match self.stall {
            Some((every, stall_delta)) if (self.frame_number + 1) % every == 0 => stall_delta,
            _ => self.delta,
        };

        self.time += delta;
        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;

        Some(info)
    }
}
