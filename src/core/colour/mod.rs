mod hsv;
pub mod hue_gradient;
