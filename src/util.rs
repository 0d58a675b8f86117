use crate::error::{NearestNeighborsError, Result};
use crate::r#type::Number;

/// Check that `x` and `y` describe a usable point set.
pub(crate) fn validate_points<N: Number>(x: &[N], y: &[N]) -> Result<()> {
    if x.is_empty() || y.is_empty() {
        return Err(NearestNeighborsError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(NearestNeighborsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if let Some(i) = x
        .iter()
        .zip(y)
        .position(|(px, py)| !px.as_f64().is_finite() || !py.as_f64().is_finite())
    {
        return Err(NearestNeighborsError::InvalidArgument(format!(
            "Point {} has a non-finite coordinate",
            i
        )));
    }
    Ok(())
}

/// Check that a query point has finite coordinates.
pub(crate) fn validate_query<N: Number>(qx: N, qy: N) -> Result<()> {
    if !qx.as_f64().is_finite() || !qy.as_f64().is_finite() {
        return Err(NearestNeighborsError::InvalidArgument(format!(
            "Query point ({:?}, {:?}) has a non-finite coordinate",
            qx, qy
        )));
    }
    Ok(())
}

/// Check that a query radius is usable.
pub(crate) fn validate_radius(r: f64) -> Result<()> {
    // Negated so that NaN is rejected as well
    if !(r >= 0.0) {
        return Err(NearestNeighborsError::InvalidArgument(format!(
            "Radius must be non-negative, got {}",
            r
        )));
    }
    Ok(())
}
