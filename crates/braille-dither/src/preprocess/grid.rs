//! The mutable sample matrix shared by the dither engine and the encoder.

/// A row-major matrix of luminance samples.
///
/// Values start in `0.0..=1.0` and may drift outside that range as
/// quantization error is diffused into them; out-of-range values are valid
/// intermediate states for threshold comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingGrid {
    samples: Vec<f64>,
    width: usize,
    height: usize,
}

impl WorkingGrid {
    /// A grid of zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            samples: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Build a grid by evaluating `f(x, y)` in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            samples,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major samples.
    #[inline]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y * self.width + x] = value;
    }

    /// Add `delta` to the sample at a signed coordinate.
    ///
    /// Coordinates outside the grid (negative, or at/after the last column
    /// or row) are dropped. Returns whether the sample was updated.
    #[inline]
    pub fn add_clipped(&mut self, x: isize, y: isize, delta: f64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.samples[y * self.width + x] += delta;
            true
        } else {
            false
        }
    }
}
