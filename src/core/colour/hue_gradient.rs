use crate::core::colour::hsv::hsv_to_rgb;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

/// Top of the hue sweep. Stops short of 360 so the fastest and slowest
/// escapes do not wrap around to the same colour.
const HUE_SWEEP_DEGREES: f64 = 300.0;
const SATURATION: f64 = 0.5;
const VALUE: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HueGradientError {
    ZeroMaxIterations,
}

impl fmt::Display for HueGradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for HueGradientError {}

/// Maps escape counts to colours: the full budget (non-escaping, inside the
/// set) gets a fixed inside colour, every smaller count gets a hue
/// proportional to `count / max_iterations`.
#[derive(Debug, Copy, Clone)]
pub struct HueGradient {
    max_iterations: u32,
}

impl HueGradient {
    pub fn new(max_iterations: u32) -> Result<Self, HueGradientError> {
        if max_iterations == 0 {
            return Err(HueGradientError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Colour for an escape count in `[0, max_iterations]`.
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        debug_assert!(iterations <= self.max_iterations);

        if iterations >= self.max_iterations {
            return Colour::BLACK;
        }

        let t = iterations as f64 / self.max_iterations as f64;
        hsv_to_rgb(t * HUE_SWEEP_DEGREES, SATURATION, VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_budget() {
        assert!(matches!(
            HueGradient::new(0),
            Err(HueGradientError::ZeroMaxIterations)
        ));
    }

    #[test]
    fn test_budget_maps_to_inside_colour() {
        let gradient = HueGradient::new(100).unwrap();

        assert_eq!(gradient.colour_for(100), Colour::BLACK);
    }

    #[test]
    fn test_escaping_counts_are_never_inside_colour() {
        let gradient = HueGradient::new(100).unwrap();

        for count in 0..100 {
            assert_ne!(gradient.colour_for(count), Colour::BLACK, "count {count}");
        }
    }

    #[test]
    fn test_zero_count_is_start_of_sweep() {
        let gradient = HueGradient::new(100).unwrap();

        // Hue 0 with half saturation: red channel saturated.
        let colour = gradient.colour_for(0);
        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, colour.b);
    }

    #[test]
    fn test_distinct_counts_get_distinct_colours() {
        let gradient = HueGradient::new(100).unwrap();

        let samples: Vec<Colour> = [0, 20, 40, 60, 80, 99]
            .iter()
            .map(|&n| gradient.colour_for(n))
            .collect();

        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let gradient = HueGradient::new(250).unwrap();

        for count in [0, 1, 100, 249, 250] {
            assert_eq!(gradient.colour_for(count), gradient.colour_for(count));
        }
    }
}
