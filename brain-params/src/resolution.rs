//! Resolution of a camera used by an agent.
use serde::{Deserialize, Serialize};

/// The resolution of a camera used by an agent.
///
/// `width` and `height` are the numbers of pixels on the horizontal and
/// vertical axes. If `black_and_white` is `true`, frames are grayscale,
/// otherwise they are RGB.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct Resolution {
    /// The width of the observation in pixels.
    pub width: usize,

    /// The height of the observation in pixels.
    pub height: usize,

    /// If `true`, the image will be in black and white.
    #[serde(alias = "blackAndWhite")]
    pub black_and_white: bool,
}

impl Resolution {
    /// Creates a resolution.
    pub fn new(width: usize, height: usize, black_and_white: bool) -> Self {
        Self {
            width,
            height,
            black_and_white,
        }
    }

    /// Number of channels of a frame.
    pub fn n_channels(&self) -> usize {
        if self.black_and_white {
            1
        } else {
            3
        }
    }

    /// Shape of a frame, `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, self.n_channels()]
    }

    /// Returns `true` if both dimensions are positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
