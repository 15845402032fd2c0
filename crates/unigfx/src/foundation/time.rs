//! Frame timing utilities

use std::time::{Duration, Instant};

/// Frame clock shared by every backend window.
///
/// Tracks wall-clock time since the previous frame and, when a target frame
/// rate is set, computes the remaining slice of the frame interval so the
/// event pump can sleep it away. The clock is monotonic (`Instant`-based);
/// deltas are never negative.
pub struct FrameClock {
    created: Instant,
    last_delta_read: Instant,
    last_frame: Instant,
    target_frame_time: Option<Duration>,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock; the creation instant is the zero point for [`Self::ticks`].
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            created: now,
            last_delta_read: now,
            last_frame: now,
            target_frame_time: None,
            frame_count: 0,
        }
    }

    /// Set the pacing target. `fps == 0` disables pacing.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_frame_time = if fps > 0 {
            Some(Duration::from_secs_f64(1.0 / f64::from(fps)))
        } else {
            None
        };
    }

    /// Seconds elapsed since the previous call to `delta_time`.
    ///
    /// The first call after construction measures from the creation instant.
    pub fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_delta_read).as_secs_f32();
        self.last_delta_read = now;
        delta
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn ticks(&self) -> u64 {
        self.created.elapsed().as_millis() as u64
    }

    /// Number of completed pacing frames.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Block until the current frame has consumed its full interval.
    ///
    /// Called once per event-pump pass. Without a target this only advances
    /// the frame marker. The sleep duration is the target interval minus the
    /// time already spent this frame, clamped to zero.
    pub fn pace(&mut self) {
        if let Some(target) = self.target_frame_time {
            let elapsed = self.last_frame.elapsed();
            if elapsed < target {
                std::thread::sleep(target - elapsed);
            }
        }
        self.last_frame = Instant::now();
        self.frame_count += 1;
    }
}
