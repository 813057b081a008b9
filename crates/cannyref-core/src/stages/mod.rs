pub mod blur;
pub mod grayscale;
pub mod nms;
pub mod sobel;
pub mod threshold;
