use crate::HfError;

/// Floating point type used throughout the solver.
///
/// All hydraulic formulas are evaluated in IEEE-754 binary64 with a fixed
/// operation order, so identical inputs give bit-identical outputs on every
/// platform that implements `f64` arithmetic correctly rounded.
pub type Real = f64;

/// Reject NaN and infinities with a named error.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Linear interpolation of `y` over a table of ascending `x` knots.
///
/// Queries outside the table are clamped to the end values.
pub fn interpolate_clamped(knots: &[(Real, Real)], x: Real) -> Result<Real, HfError> {
    let (first, last) = match (knots.first(), knots.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => {
            return Err(HfError::InvalidArg {
                what: "interpolation table is empty",
            });
        }
    };
    ensure_finite(x, "interpolation abscissa")?;

    if x <= first.0 {
        return Ok(first.1);
    }
    if x >= last.0 {
        return Ok(last.1);
    }

    for pair in knots.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            let t = (x - x0) / (x1 - x0);
            return Ok(y0 + t * (y1 - y0));
        }
    }

    Ok(last.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn interpolation_hits_knots_and_midpoints() {
        let table = [(0.0, 10.0), (10.0, 20.0), (20.0, 40.0)];
        assert_eq!(interpolate_clamped(&table, 10.0).unwrap(), 20.0);
        assert_eq!(interpolate_clamped(&table, 5.0).unwrap(), 15.0);
        assert_eq!(interpolate_clamped(&table, 15.0).unwrap(), 30.0);
    }

    #[test]
    fn interpolation_clamps_outside_table() {
        let table = [(0.0, 10.0), (10.0, 20.0)];
        assert_eq!(interpolate_clamped(&table, -5.0).unwrap(), 10.0);
        assert_eq!(interpolate_clamped(&table, 99.0).unwrap(), 20.0);
        assert!(interpolate_clamped(&[], 1.0).is_err());
        assert!(interpolate_clamped(&table, Real::NAN).is_err());
    }
}
