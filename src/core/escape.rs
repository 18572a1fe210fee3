//! Escape-time evaluation for points of the complex plane.
//!
//! `escape_time` is total over finite inputs and deterministic: it keeps no
//! state between calls. The two closed-form interior tests cover the main
//! cardioid and the period-2 bulb, the two largest regions provably inside
//! the set; points they catch would otherwise burn the whole iteration
//! budget in the loop.

/// Squared escape radius. Any orbit point outside |z| = 2 diverges.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Returns the iteration at which the orbit of c = re + i*im leaves the
/// escape radius, capped at `max_iterations`. Exactly `max_iterations`
/// means the point did not escape within the budget.
#[must_use]
pub fn escape_time(re: f64, im: f64, max_iterations: u32) -> u32 {
    if in_main_cardioid(re, im) || in_period2_bulb(re, im) {
        return max_iterations;
    }

    // Already outside the bounding disk: escapes on iteration 0.
    if re * re + im * im > ESCAPE_RADIUS_SQUARED {
        return 0;
    }

    iterate(re, im, max_iterations)
}

/// q·(q + (x − 1/4)) < y²/4 with q = (x − 1/4)² + y².
fn in_main_cardioid(re: f64, im: f64) -> bool {
    let q = (re - 0.25) * (re - 0.25) + im * im;
    q * (q + (re - 0.25)) < 0.25 * im * im
}

/// (x + 1)² + y² < 1/16.
fn in_period2_bulb(re: f64, im: f64) -> bool {
    (re + 1.0) * (re + 1.0) + im * im < 0.0625
}

/// The plain escape loop, without the interior short-circuits. Applies
/// z ← z² + c via the real/imaginary decomposition.
fn iterate(re: f64, im: f64, max_iterations: u32) -> u32 {
    let mut zx = 0.0_f64;
    let mut zy = 0.0_f64;
    let mut count = 0;

    while count < max_iterations {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        if zx2 + zy2 > ESCAPE_RADIUS_SQUARED {
            break;
        }

        zy = 2.0 * zx * zy + im;
        zx = zx2 - zy2 + re;
        count += 1;
    }

    count
}
