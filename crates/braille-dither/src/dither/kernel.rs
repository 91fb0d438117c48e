//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of one sample is
//! distributed to the neighbours that haven't been visited yet.

/// One neighbour of an error diffusion kernel.
///
/// - `dx`: horizontal offset (positive = right)
/// - `dy`: vertical offset (0 = current row, positive = below)
/// - `weight`: fraction of the error added to that neighbour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DitherNode {
    pub dx: i32,
    pub dy: i32,
    pub weight: f64,
}

impl DitherNode {
    #[inline]
    pub const fn new(dx: i32, dy: i32, weight: f64) -> Self {
        Self { dx, dy, weight }
    }
}

/// An error diffusion kernel.
///
/// # Error Propagation
///
/// The total error propagated is the sum of the node weights. Floyd-Steinberg,
/// Sierra Lite and Jarvis-Judice-Ninke propagate 100%; Atkinson intentionally
/// propagates only 75%, which gives its harder, higher-contrast look.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Neighbours in diffusion order.
    pub nodes: &'static [DitherNode],
}

impl Kernel {
    /// Sum of all node weights.
    pub fn total_weight(&self) -> f64 {
        self.nodes.iter().map(|node| node.weight).sum()
    }

    /// Whether this kernel diffuses any error at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    nodes: &[
        DitherNode::new(1, 0, 7.0 / 16.0),  // right
        DitherNode::new(-1, 1, 3.0 / 16.0), // bottom-left
        DitherNode::new(0, 1, 5.0 / 16.0),  // bottom
        DitherNode::new(1, 1, 1.0 / 16.0),  // bottom-right
    ],
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    nodes: &[
        DitherNode::new(1, 0, 1.0 / 8.0),  // right
        DitherNode::new(2, 0, 1.0 / 8.0),  // two right
        DitherNode::new(-1, 1, 1.0 / 8.0), // bottom-left
        DitherNode::new(0, 1, 1.0 / 8.0),  // bottom
        DitherNode::new(1, 1, 1.0 / 8.0),  // bottom-right
        DitherNode::new(0, 2, 1.0 / 8.0),  // two below
    ],
};

/// Sierra Lite dithering kernel.
///
/// Distributes error to 3 neighbors with 100% propagation (4/4).
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    nodes: &[
        DitherNode::new(1, 0, 2.0 / 4.0),
        DitherNode::new(-1, 1, 1.0 / 4.0),
        DitherNode::new(0, 1, 1.0 / 4.0),
    ],
};

/// Jarvis-Judice-Ninke ("minimized average error") dithering kernel.
///
/// Distributes error to 12 neighbors over 3 rows with 100% propagation (48/48).
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    nodes: &[
        DitherNode::new(1, 0, 7.0 / 48.0),
        DitherNode::new(2, 0, 5.0 / 48.0),
        DitherNode::new(-2, 1, 3.0 / 48.0),
        DitherNode::new(-1, 1, 5.0 / 48.0),
        DitherNode::new(0, 1, 7.0 / 48.0),
        DitherNode::new(1, 1, 5.0 / 48.0),
        DitherNode::new(2, 1, 3.0 / 48.0),
        DitherNode::new(-2, 2, 1.0 / 48.0),
        DitherNode::new(-1, 2, 3.0 / 48.0),
        DitherNode::new(0, 2, 5.0 / 48.0),
        DitherNode::new(1, 2, 3.0 / 48.0),
        DitherNode::new(2, 2, 1.0 / 48.0),
    ],
};

/// The empty kernel: pure thresholding, no diffusion.
pub const NO_DIFFUSION: Kernel = Kernel {
    nodes: &[],
};
