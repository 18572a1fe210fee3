use std::error::Error;
use std::fmt;

/// Default view: the whole set with some margin, matching the reset bounds.
const DEFAULT_RE_MIN: f64 = -2.0;
const DEFAULT_RE_MAX: f64 = 1.5;
const DEFAULT_IM_MIN: f64 = -1.5;
const DEFAULT_IM_MAX: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        re_span: f64,
        im_span: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { re_span, im_span } => {
                write!(
                    f,
                    "viewport spans must be positive: re {} x im {}",
                    re_span, im_span
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently mapped onto the output image.
///
/// Invariant: `re_min < re_max` and `im_min < im_max`. Read-only during a
/// render pass; mutated only between passes by the interaction layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl Viewport {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, ViewportError> {
        let re_span = re_max - re_min;
        let im_span = im_max - im_min;

        if !(re_span > 0.0) || !(im_span > 0.0) {
            return Err(ViewportError::InvalidBounds { re_span, im_span });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    #[must_use]
    pub fn default_view() -> Self {
        Self {
            re_min: DEFAULT_RE_MIN,
            re_max: DEFAULT_RE_MAX,
            im_min: DEFAULT_IM_MIN,
            im_max: DEFAULT_IM_MAX,
        }
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.im_max - self.im_min
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.re_min + self.re_max) / 2.0,
            (self.im_min + self.im_max) / 2.0,
        )
    }

    /// Maps a pixel coordinate to its point in the complex plane.
    ///
    /// Row 0 is the top of the image and corresponds to `im_max`, so the
    /// imaginary axis is flipped relative to pixel rows.
    #[must_use]
    pub fn map_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> (f64, f64) {
        let re = self.re_min + (x as f64 / width as f64) * self.re_span();
        let im = self.im_max - (y as f64 / height as f64) * self.im_span();
        (re, im)
    }

    /// Shifts the viewport by a plane-space delta.
    #[must_use]
    pub fn panned(&self, re_delta: f64, im_delta: f64) -> Self {
        Self {
            re_min: self.re_min + re_delta,
            re_max: self.re_max + re_delta,
            im_min: self.im_min + im_delta,
            im_max: self.im_max + im_delta,
        }
    }

    /// Scales the viewport spans by `factor`, re-centered on the given plane
    /// point. Factors below 1 zoom in.
    #[must_use]
    pub fn zoomed_about(&self, re: f64, im: f64, factor: f64) -> Self {
        let half_re = self.re_span() * factor / 2.0;
        let half_im = self.im_span() * factor / 2.0;

        Self {
            re_min: re - half_re,
            re_max: re + half_re,
            im_min: im - half_im,
            im_max: im + half_im,
        }
    }

    /// Scales each axis span around the current center. Used when the window
    /// is resized, so one plane unit keeps the same on-screen size.
    #[must_use]
    pub fn scaled(&self, re_scale: f64, im_scale: f64) -> Self {
        let (center_re, center_im) = self.center();
        let half_re = self.re_span() * re_scale / 2.0;
        let half_im = self.im_span() * im_scale / 2.0;

        Self {
            re_min: center_re - half_re,
            re_max: center_re + half_re,
            im_min: center_im - half_im,
            im_max: center_im + half_im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.0, 1.5, -1.5, 1.5).unwrap();

        assert_eq!(viewport.re_min(), -2.0);
        assert_eq!(viewport.re_max(), 1.5);
        assert_eq!(viewport.im_min(), -1.5);
        assert_eq!(viewport.im_max(), 1.5);
        assert_eq!(viewport.re_span(), 3.5);
        assert_eq!(viewport.im_span(), 3.0);
    }

    #[test]
    fn test_viewport_bounds_must_be_increasing() {
        let zero_re = Viewport::new(1.0, 1.0, -1.0, 1.0);
        let reversed_re = Viewport::new(1.0, -1.0, -1.0, 1.0);
        let zero_im = Viewport::new(-1.0, 1.0, 0.5, 0.5);
        let reversed_im = Viewport::new(-1.0, 1.0, 1.0, -1.0);

        assert_eq!(
            zero_re,
            Err(ViewportError::InvalidBounds {
                re_span: 0.0,
                im_span: 2.0
            })
        );
        assert_eq!(
            reversed_re,
            Err(ViewportError::InvalidBounds {
                re_span: -2.0,
                im_span: 2.0
            })
        );
        assert_eq!(
            zero_im,
            Err(ViewportError::InvalidBounds {
                re_span: 2.0,
                im_span: 0.0
            })
        );
        assert_eq!(
            reversed_im,
            Err(ViewportError::InvalidBounds {
                re_span: 2.0,
                im_span: -2.0
            })
        );
    }

    #[test]
    fn test_default_view_bounds() {
        let viewport = Viewport::default_view();

        assert_eq!(viewport, Viewport::new(-2.0, 1.5, -1.5, 1.5).unwrap());
    }

    #[test]
    fn test_map_pixel_top_left_is_re_min_im_max() {
        let viewport = Viewport::new(-2.0, 1.5, -1.5, 1.5).unwrap();

        let (re, im) = viewport.map_pixel(0, 0, 900, 900);

        assert_eq!(re, -2.0);
        assert_eq!(im, 1.5);
    }

    #[test]
    fn test_map_pixel_vertical_flip() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let (_, im_top) = viewport.map_pixel(0, 0, 100, 100);
        let (_, im_mid) = viewport.map_pixel(0, 50, 100, 100);
        let (_, im_low) = viewport.map_pixel(0, 75, 100, 100);

        assert_eq!(im_top, 1.0);
        assert_eq!(im_mid, 0.0);
        assert_eq!(im_low, -0.5);
    }

    #[test]
    fn test_map_pixel_horizontal_midpoint() {
        let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        let (re, _) = viewport.map_pixel(50, 0, 100, 100);

        assert_eq!(re, 0.0);
    }

    #[test]
    fn test_panned_shifts_both_bounds() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let panned = viewport.panned(0.5, -0.25);

        assert_eq!(panned.re_min(), -0.5);
        assert_eq!(panned.re_max(), 1.5);
        assert_eq!(panned.im_min(), -1.25);
        assert_eq!(panned.im_max(), 0.75);
        assert_eq!(panned.re_span(), viewport.re_span());
        assert_eq!(panned.im_span(), viewport.im_span());
    }

    #[test]
    fn test_zoomed_about_centers_on_target() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();

        let zoomed = viewport.zoomed_about(1.0, -1.0, 0.5);

        assert_eq!(zoomed.center(), (1.0, -1.0));
        assert_eq!(zoomed.re_span(), 2.0);
        assert_eq!(zoomed.im_span(), 2.0);
    }

    #[test]
    fn test_zoomed_about_factor_above_one_widens() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();

        let zoomed = viewport.zoomed_about(0.0, 0.0, 1.25);

        assert_eq!(zoomed.re_span(), 2.5);
        assert_eq!(zoomed.im_span(), 2.5);
    }

    #[test]
    fn test_scaled_keeps_center_fixed() {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap();

        let scaled = viewport.scaled(2.0, 0.5);

        assert_eq!(scaled.center(), viewport.center());
        assert_eq!(scaled.re_span(), 6.0);
        assert_eq!(scaled.im_span(), 1.5);
    }
}
