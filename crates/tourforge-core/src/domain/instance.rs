//! Distance oracles and the bundled problem instances.

use std::fmt::Debug;

use crate::error::{Result, TourForgeError};

/// Pairwise travel distances between cities.
///
/// Implementations must be symmetric, return finite non-negative values and
/// `0.0` on the diagonal. Lookups outside `[0, city_count)` return
/// `InvalidIndex`.
pub trait DistanceOracle: Debug {
    /// Number of cities `N`.
    fn city_count(&self) -> usize;

    /// Distance between two cities.
    fn distance(&self, from: usize, to: usize) -> Result<f64>;
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    fn city_count(&self) -> usize {
        (**self).city_count()
    }

    fn distance(&self, from: usize, to: usize) -> Result<f64> {
        (**self).distance(from, to)
    }
}

/// Dense row-major distance matrix.
///
/// # Example
///
/// ```
/// use tourforge_core::{DistanceMatrix, DistanceOracle};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0],
///     vec![2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(matrix.distance(0, 1).unwrap(), 2.0);
/// assert!(matrix.distance(0, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    city_count: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a matrix from `city_count * city_count` row-major values.
    pub fn new(city_count: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != city_count * city_count {
            return Err(TourForgeError::InvalidInstance(format!(
                "expected {} distances for {city_count} cities, got {}",
                city_count * city_count,
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(TourForgeError::InvalidInstance(format!(
                "distance {bad} is not finite and non-negative"
            )));
        }
        Ok(Self { city_count, values })
    }

    /// Creates a matrix from one row per city.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let city_count = rows.len();
        if let Some(row) = rows.iter().find(|row| row.len() != city_count) {
            return Err(TourForgeError::InvalidInstance(format!(
                "row of length {} in a {city_count}x{city_count} matrix",
                row.len()
            )));
        }
        Self::new(city_count, rows.into_iter().flatten().collect())
    }
}

impl DistanceOracle for DistanceMatrix {
    fn city_count(&self) -> usize {
        self.city_count
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> Result<f64> {
        check_index(from, self.city_count)?;
        check_index(to, self.city_count)?;
        Ok(self.values[from * self.city_count + to])
    }
}

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Cities in the plane with Euclidean distances computed on demand.
///
/// # Example
///
/// ```
/// use tourforge_core::{DistanceOracle, EuclideanInstance};
///
/// let instance = EuclideanInstance::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(instance.distance(0, 1).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuclideanInstance {
    points: Vec<Point>,
}

impl EuclideanInstance {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(TourForgeError::InvalidInstance(format!(
                "non-finite coordinate ({}, {})",
                p.x, p.y
            )));
        }
        Ok(Self { points })
    }

    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self> {
        Self::new(coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Precomputes every pairwise distance.
    pub fn to_matrix(&self) -> DistanceMatrix {
        let values = self
            .points
            .iter()
            .flat_map(|a| self.points.iter().map(move |b| a.distance_to(b)))
            .collect();
        DistanceMatrix {
            city_count: self.points.len(),
            values,
        }
    }
}

impl DistanceOracle for EuclideanInstance {
    fn city_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> Result<f64> {
        let n = self.points.len();
        check_index(from, n)?;
        check_index(to, n)?;
        Ok(self.points[from].distance_to(&self.points[to]))
    }
}

#[inline]
fn check_index(index: usize, city_count: usize) -> Result<()> {
    if index < city_count {
        Ok(())
    } else {
        Err(TourForgeError::InvalidIndex { index, city_count })
    }
}
