//! Cities and the Euclidean distance model.
//!
//! The model is built once per instance and is read-only afterwards, so a
//! single copy can be shared (behind an `Arc`) by solvers running on
//! different threads.

use crate::error::{AnnealError, AnnealResult};

/// A city: an immutable point in the plane.
///
/// Cities are identified by their index in the instance's city list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Dense n×n distance matrix stored row-major in one buffer.
///
/// Invariants: `get(i, j) == get(j, i)` and `get(i, i) == 0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the Euclidean matrix for `cities` in O(n²).
    ///
    /// Only the upper triangle is computed; the lower triangle is mirrored
    /// so symmetry holds bit-for-bit.
    pub fn euclidean(cities: &[City]) -> Self {
        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Largest entry (0.0 for an empty or all-zero matrix).
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Copy scaled by the largest entry, or an unchanged copy if that
    /// entry is 0.
    pub fn normalized(&self) -> Self {
        let max = self.max();
        if max > 0.0 {
            Self {
                n: self.n,
                data: self.data.iter().map(|d| d / max).collect(),
            }
        } else {
            self.clone()
        }
    }
}

/// Which matrix route costs are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CostMatrix {
    /// Plain Euclidean distances.
    #[default]
    Raw,
    /// Distances divided by the largest pairwise distance.
    Normalized,
}

/// The cities of one instance together with their raw and normalized
/// distance matrices.
#[derive(Debug, Clone)]
pub struct DistanceModel {
    cities: Vec<City>,
    raw: DistanceMatrix,
    normalized: DistanceMatrix,
}

impl DistanceModel {
    /// Builds the model.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidInstance`] if fewer than two cities are given,
    /// a coordinate is not finite, or distances are so large that a tour
    /// cost would overflow.
    pub fn new(cities: Vec<City>) -> AnnealResult<Self> {
        if cities.len() < 2 {
            return Err(AnnealError::InvalidInstance(format!(
                "need at least 2 cities, got {}",
                cities.len()
            )));
        }
        if let Some(idx) = cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(AnnealError::InvalidInstance(format!(
                "city {idx} has a non-finite coordinate"
            )));
        }

        let raw = DistanceMatrix::euclidean(&cities);
        // every tour cost is bounded by n * max, which must stay finite too
        let max = raw.max();
        let overflows = raw.data.iter().any(|d| !d.is_finite());
        if overflows || !(max * cities.len() as f64).is_finite() {
            return Err(AnnealError::InvalidInstance(format!(
                "coordinates too large: longest distance {max:e} overflows tour costs"
            )));
        }
        let normalized = raw.normalized();
        Ok(Self {
            cities,
            raw,
            normalized,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn raw(&self) -> &DistanceMatrix {
        &self.raw
    }

    pub fn normalized(&self) -> &DistanceMatrix {
        &self.normalized
    }

    /// The matrix selected by `kind`.
    pub fn matrix(&self, kind: CostMatrix) -> &DistanceMatrix {
        match kind {
            CostMatrix::Raw => &self.raw,
            CostMatrix::Normalized => &self.normalized,
        }
    }
}
