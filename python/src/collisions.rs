use crate::extract_shape;
use ::collisions as libcollisions;
use common::vector::Vector;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Distance along the ray to `shape`, or `None` when it is missed within
/// `max_distance`.
#[pyfunction]
#[pyo3(signature = (shape, point, direction, max_distance=None))]
pub fn cast_ray(
    shape: &Bound<'_, PyAny>,
    point: (f32, f32),
    direction: (f32, f32),
    max_distance: Option<f32>,
) -> PyResult<Option<f32>> {
    let shape = extract_shape(shape)?;
    Ok(libcollisions::cast_ray(
        &shape,
        Vector::from(point),
        Vector::from(direction),
        max_distance.unwrap_or(f32::MAX),
    ))
}

#[pyfunction]
pub fn intersects(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<bool> {
    let a = extract_shape(a)?;
    let b = extract_shape(b)?;
    libcollisions::intersects(&a, &b)
        .map_err(|_| PyValueError::new_err("unsupported shape pair"))
}
