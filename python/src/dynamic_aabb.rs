use ::dynamic_aabb::shapes::Aabb;
use ::dynamic_aabb::vector::Vector;
use ::dynamic_aabb::{Config, DynamicAabb, DynamicAabbError, LeafId};

use crate::{extract_aabb, extract_shape, PyAabb};
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::pyclass;
use pyo3::pymethods;
use pyo3::types::{PyAny, PyAnyMethods};
use pyo3::{Bound, Py, PyErr, PyResult, Python};

#[derive(Clone)]
#[pyclass(name = "Config")]
pub struct PyConfig {
    pool_size: usize,
    unit_tolerance: f32,
}

#[pymethods]
impl PyConfig {
    #[new]
    #[pyo3(signature = (pool_size=None, unit_tolerance=None))]
    pub fn new(pool_size: Option<usize>, unit_tolerance: Option<f32>) -> Self {
        let defaults = Config::default();
        PyConfig {
            pool_size: pool_size.unwrap_or(defaults.pool_size),
            unit_tolerance: unit_tolerance.unwrap_or(defaults.unit_tolerance),
        }
    }
}

#[pyclass(name = "DynamicAABB", unsendable)]
pub struct DynamicAabbWrapper {
    tree: DynamicAabb<Py<PyAny>>,
}

fn map_tree_error(err: DynamicAabbError) -> PyErr {
    match err {
        DynamicAabbError::NotFound { .. } => PyKeyError::new_err(err.to_string()),
        DynamicAabbError::InvalidArgument { .. } => PyValueError::new_err(err.to_string()),
    }
}

#[pymethods]
impl DynamicAabbWrapper {
    #[new]
    pub fn new() -> Self {
        DynamicAabbWrapper {
            tree: DynamicAabb::new(),
        }
    }

    #[staticmethod]
    pub fn new_with_config(config: PyConfig) -> Self {
        let rust_config = Config {
            pool_size: config.pool_size,
            unit_tolerance: config.unit_tolerance,
        };
        DynamicAabbWrapper {
            tree: DynamicAabb::new_with_config(rust_config),
        }
    }

    /// Stores `obj` under `aabb` and returns the id to remove it with.
    pub fn add(&mut self, obj: Py<PyAny>, aabb: &Bound<'_, PyAny>) -> PyResult<LeafId> {
        let aabb = extract_aabb(aabb)?;
        Ok(self.tree.add(obj, aabb))
    }

    pub fn remove(&mut self, node_id: LeafId) -> PyResult<Py<PyAny>> {
        self.tree.remove(node_id).map_err(map_tree_error)
    }

    pub fn query_shape(&self, py: Python, shape: &Bound<'_, PyAny>) -> PyResult<Vec<Py<PyAny>>> {
        let shape = extract_shape(shape)?;
        Ok(self
            .tree
            .query_shape(&shape)
            .into_iter()
            .map(|obj| obj.clone_ref(py))
            .collect())
    }

    pub fn query_aabb(&self, py: Python, aabb: &Bound<'_, PyAny>) -> PyResult<Vec<Py<PyAny>>> {
        let aabb = extract_aabb(aabb)?;
        Ok(self
            .tree
            .query_aabb(&aabb)
            .into_iter()
            .map(|obj| obj.clone_ref(py))
            .collect())
    }

    /// `callback(obj, point, direction, max_distance)` is called for every
    /// candidate; see the Rust `DynamicAabb::raycast` for what it may return.
    /// An exception raised by the callback stops the cast and propagates.
    #[pyo3(signature = (point, direction, *, callback, max_distance=None))]
    pub fn raycast(
        &self,
        py: Python,
        point: (f32, f32),
        direction: (f32, f32),
        callback: &Bound<'_, PyAny>,
        max_distance: Option<f32>,
    ) -> PyResult<Option<Py<PyAny>>> {
        let origin = Vector::from(point);
        let direction = Vector::from(direction);
        let length2 = direction.length2();
        if (length2 - 1.0).abs() >= self.tree.config().unit_tolerance {
            return Err(PyValueError::new_err(format!(
                "raycast direction must be a unit vector (length2: {})",
                length2
            )));
        }

        let mut failure: Option<PyErr> = None;
        let hit = self.tree.raycast(
            origin,
            direction,
            |obj, origin, direction, max_distance| {
                let args = (
                    obj.clone_ref(py),
                    (origin.x, origin.y),
                    (direction.x, direction.y),
                    max_distance,
                );
                match callback
                    .call1(args)
                    .and_then(|value| value.extract::<Option<f32>>())
                {
                    Ok(value) => value,
                    Err(err) => {
                        failure = Some(err);
                        Some(0.0)
                    }
                }
            },
            max_distance.unwrap_or(f32::INFINITY),
        );
        if let Some(err) = failure {
            return Err(err);
        }
        Ok(hit.map(|obj| obj.clone_ref(py)))
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn contains(&self, node_id: LeafId) -> bool {
        self.tree.contains(node_id)
    }

    pub fn get_aabb(&self, node_id: LeafId) -> PyResult<PyAabb> {
        self.tree
            .aabb(node_id)
            .map(PyAabb::from)
            .ok_or_else(|| map_tree_error(DynamicAabbError::NotFound { id: node_id }))
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn dump(&self) -> String {
        self.tree.dump()
    }

    pub fn __len__(&self) -> usize {
        self.tree.len()
    }
}

impl From<Aabb> for PyAabb {
    fn from(aabb: Aabb) -> Self {
        PyAabb { aabb }
    }
}
