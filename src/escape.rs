//! The escape-time evaluator, the dominant per-pixel cost.

use num::Complex;

/// Number of iterations of `z = z * z + c` before `|z|` exceeds 2,
/// capped at `max_iterations`.
///
/// Returns a value in `[0, max_iterations]`; the cap is returned
/// exactly when the orbit stays within magnitude 2 for every step, so a
/// result of `max_iterations` marks an interior point.  The magnitude
/// test compares `norm_sqr()` against 4.0 to skip the square root.
pub fn escape(c: Complex<f64>, max_iterations: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut n = 0;
    while z.norm_sqr() <= 4.0 && n < max_iterations {
        z = z * z + c;
        n += 1;
    }
    n
}
