/// Floor division of two floats.
///
/// Computes the quotient from the fmod remainder and floors it, snapping up
/// when the intermediate quotient lands more than half a step above the floor.
/// This is not `(a / b).floor()`: that form can round a quotient like
/// `0.9999999999999999` up to `1.0` before flooring.
///
/// `b` must be non-zero.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    // Remainder must carry the divisor's sign.
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let mut floor = div.floor();
    if div - floor > 0.5 {
        floor += 1.0;
    }
    floor
}
