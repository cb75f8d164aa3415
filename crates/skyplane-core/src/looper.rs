//! Endless vertical sky scroll.
//!
//! Two copies of the sky image are stacked; the offset advances a fixed step
//! per display frame and wraps at the viewport height, so the upper copy is
//! in place by the time the lower one leaves the screen. The step is per
//! frame, not per second: scroll speed follows the host's refresh rate.

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLooper {
    offset: f32,
    step: f32,
    height: f32,
    frames: u64,
}

impl BackgroundLooper {
    pub fn new(height: f32, step: f32) -> Self {
        Self {
            offset: 0.0,
            step,
            height,
            frames: 0,
        }
    }

    /// Current offset, always in `[0, height)` (0 for an empty viewport).
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One display frame.
    pub fn tick(&mut self) -> f32 {
        self.frames += 1;
        self.offset = wrap(self.offset + self.step, self.height);
        self.offset
    }

    /// Vertical translation of the two tiles: the visible one and the one
    /// waiting directly above it.
    pub fn tiles(&self) -> [f32; 2] {
        [self.offset, self.offset - self.height]
    }

    pub fn resize(&mut self, height: f32) {
        self.height = height;
        self.offset = wrap(self.offset, height);
    }
}

#[inline]
fn wrap(v: f32, height: f32) -> f32 {
    if height > 0.0 {
        // rem_euclid can round up to exactly `height` for tiny negatives.
        let r = v.rem_euclid(height);
        if r >= height {
            0.0
        } else {
            r
        }
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_viewport_pins_offset() {
        let mut l = BackgroundLooper::new(0.0, 1.0);
        l.tick();
        assert_eq!(l.offset(), 0.0);
    }

    #[test]
    fn shrinking_rewraps_offset() {
        let mut l = BackgroundLooper::new(800.0, 1.0);
        for _ in 0..650 {
            l.tick();
        }
        l.resize(600.0);
        assert_eq!(l.offset(), 50.0);
    }
}
