use common::shapes::{Aabb, Circle, Segment, Shape, ShapeEnum};
use common::vector::Vector;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyAny, PyModule};
use pyo3::{Bound, PyResult, Python};

mod collisions;
mod dynamic_aabb;

use crate::collisions::{cast_ray, intersects};
use crate::dynamic_aabb::{DynamicAabbWrapper, PyConfig};

#[pymodule]
fn pycollisions(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cast_ray, m)?)?;
    m.add_function(wrap_pyfunction!(intersects, m)?)?;
    Ok(())
}

#[pymodule]
fn bolt(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    let submod_collisions = PyModule::new(py, "collisions")?;
    pycollisions(py, &submod_collisions)?;
    m.add_submodule(&submod_collisions)?;

    m.add_class::<DynamicAabbWrapper>()?;
    m.add_class::<PyConfig>()?;

    m.add_class::<PyAabb>()?;
    m.add_class::<PyCircle>()?;
    m.add_class::<PySegment>()?;

    Ok(())
}

#[derive(Clone, Debug)]
#[pyclass(name = "Circle")]
pub struct PyCircle {
    #[pyo3(get, set)]
    pub x: f32,
    #[pyo3(get, set)]
    pub y: f32,
    #[pyo3(get, set)]
    pub radius: f32,
}

#[pymethods]
impl PyCircle {
    #[new]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        PyCircle { x, y, radius }
    }

    pub fn bbox(&self) -> PyAabb {
        let circle = Circle::new(Vector::new(self.x, self.y), self.radius);
        PyAabb {
            aabb: circle.bounding_box(),
        }
    }
}

#[derive(Clone, Debug)]
#[pyclass(name = "Segment")]
pub struct PySegment {
    segment: Segment,
}

#[pymethods]
impl PySegment {
    #[new]
    pub fn new(a: (f32, f32), b: (f32, f32)) -> Self {
        PySegment {
            segment: Segment::new(a.into(), b.into()),
        }
    }

    #[getter]
    pub fn a(&self) -> (f32, f32) {
        self.segment.a.into()
    }

    #[getter]
    pub fn b(&self) -> (f32, f32) {
        self.segment.b.into()
    }

    pub fn length(&self) -> f32 {
        self.segment.length()
    }
}

#[derive(Clone, Debug)]
#[pyclass(name = "AABB")]
pub struct PyAabb {
    aabb: Aabb,
}

#[pymethods]
impl PyAabb {
    #[new]
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> PyResult<Self> {
        if min_x > max_x || min_y > max_y {
            return Err(PyValueError::new_err(format!(
                "invalid AABB: ({}, {}) > ({}, {})",
                min_x, min_y, max_x, max_y
            )));
        }
        Ok(PyAabb {
            aabb: Aabb::from_min_max(min_x, min_y, max_x, max_y),
        })
    }

    #[getter]
    pub fn min_x(&self) -> f32 {
        self.aabb.lo.x
    }

    #[getter]
    pub fn min_y(&self) -> f32 {
        self.aabb.lo.y
    }

    #[getter]
    pub fn max_x(&self) -> f32 {
        self.aabb.hi.x
    }

    #[getter]
    pub fn max_y(&self) -> f32 {
        self.aabb.hi.y
    }

    #[getter]
    pub fn width(&self) -> f32 {
        self.aabb.width()
    }

    #[getter]
    pub fn height(&self) -> f32 {
        self.aabb.height()
    }

    pub fn center(&self) -> (f32, f32) {
        self.aabb.center().into()
    }

    pub fn area(&self) -> f32 {
        self.aabb.area()
    }

    pub fn union(&self, other: &PyAabb) -> PyAabb {
        PyAabb {
            aabb: self.aabb.union(&other.aabb),
        }
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.aabb.contains(Vector::new(x, y))
    }

    pub fn intersects(&self, other: &PyAabb) -> bool {
        self.aabb.intersects(&other.aabb)
    }

    pub fn distance_to_point(&self, x: f32, y: f32) -> f32 {
        self.aabb.distance(Vector::new(x, y))
    }

    pub fn bbox(&self) -> PyAabb {
        self.clone()
    }

    pub fn __repr__(&self) -> String {
        format!(
            "AABB({}, {}, {}, {})",
            self.aabb.lo.x, self.aabb.lo.y, self.aabb.hi.x, self.aabb.hi.y
        )
    }
}

fn extract_shape(shape: &Bound<'_, PyAny>) -> PyResult<ShapeEnum> {
    if let Ok(py_aabb) = shape.extract::<PyAabb>() {
        Ok(ShapeEnum::Aabb(py_aabb.aabb))
    } else if let Ok(py_circle) = shape.extract::<PyCircle>() {
        Ok(ShapeEnum::Circle(Circle::new(
            Vector::new(py_circle.x, py_circle.y),
            py_circle.radius,
        )))
    } else if let Ok(py_segment) = shape.extract::<PySegment>() {
        Ok(ShapeEnum::Segment(py_segment.segment))
    } else {
        Err(PyValueError::new_err(
            "Expected an AABB, Circle or Segment object",
        ))
    }
}

fn extract_aabb(aabb: &Bound<'_, PyAny>) -> PyResult<Aabb> {
    aabb.extract::<PyAabb>()
        .map(|py_aabb| py_aabb.aabb)
        .map_err(|_| PyValueError::new_err("Expected an AABB object"))
}
