/// Q0.11 fixed-point luminance weight for the red channel (613/2048 ~ 0.2993).
pub const LUMA_WEIGHT_R: u32 = 613;

/// Q0.11 fixed-point luminance weight for the green channel (1203/2048 ~ 0.5874).
pub const LUMA_WEIGHT_G: u32 = 1203;

/// Q0.11 fixed-point luminance weight for the blue channel (234/2048 ~ 0.1143).
pub const LUMA_WEIGHT_B: u32 = 234;

/// Right shift that drops the fraction bits of the luminance weights.
pub const LUMA_SHIFT: u32 = 11;

/// Rows/columns of reflected context added before every 3x3 windowed stage.
pub const WINDOW_PAD: usize = 1;

/// Bias added before the Gaussian normalization shift so halves round up.
pub const BLUR_ROUND_BIAS: u32 = 8;

/// Normalization shift for the 3x3 Gaussian kernel (taps sum to 16).
pub const BLUR_NORM_SHIFT: u32 = 4;

/// Marker value for strong edge pixels in the threshold and final grids.
pub const STRONG_EDGE: u8 = 255;

/// Marker value for weak edge pixels in the threshold grid.
pub const WEAK_EDGE: u8 = 128;

/// Strong cells a weak pixel's 3x3 window must hold to be promoted
/// during hysteresis.
pub const MIN_STRONG_NEIGHBORS: u32 = 2;

/// Default grid width in pixels.
pub const DEFAULT_WIDTH: usize = 50;

/// Default grid height in pixels.
pub const DEFAULT_HEIGHT: usize = 50;

/// Default high threshold: gradient magnitudes at or above it are strong edges.
pub const DEFAULT_HIGH_THRESHOLD: u8 = 100;

/// Default low threshold: magnitudes in [low, high) are weak edges.
pub const DEFAULT_LOW_THRESHOLD: u8 = 50;
