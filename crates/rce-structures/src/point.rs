// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

//! Labeled 2-D training point

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{StructuresError, StructuresResult};

/// Identity of a point inside a dataset: the exact `"x,y"` rendering of its coordinates.
///
/// There is no tolerance: `1.0` and `1.0000001` produce different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointKey(String);

impl PointKey {
    pub fn from_coordinates(x: f64, y: f64) -> Self {
        Self(format!("{},{}", x, y))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled coordinate in the plane.
///
/// Field names match the persisted dataset schema (`x`, `y`, `class_name`).
/// Points are immutable once built; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    class_name: String,
}

impl Point {
    /// Create a point without validation.
    ///
    /// Use [`Point::try_new`] for values coming from user input.
    pub fn new(x: f64, y: f64, class_name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            class_name: class_name.into(),
        }
    }

    /// Create a point, rejecting non-finite coordinates and empty class names
    pub fn try_new(x: f64, y: f64, class_name: impl Into<String>) -> StructuresResult<Self> {
        let class_name = class_name.into();
        if !x.is_finite() || !y.is_finite() {
            return Err(StructuresError::InvalidPoint(format!(
                "coordinates must be finite, got ({}, {})",
                x, y
            )));
        }
        if class_name.trim().is_empty() {
            return Err(StructuresError::InvalidPoint(format!(
                "class name of point ({}, {}) is empty",
                x, y
            )));
        }
        Ok(Self { x, y, class_name })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Dataset identity key (`"x,y"`)
    pub fn key(&self) -> PointKey {
        PointKey::from_coordinates(self.x, self.y)
    }

    /// Euclidean distance from this point to `(cx, cy)`
    #[inline]
    pub fn distance_to(&self, cx: f64, cy: f64) -> f64 {
        ((self.x - cx).powi(2) + (self.y - cy).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, class = {}]", self.x, self.y, self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_exact_coordinate_pair() {
        let p = Point::new(1.5, -2.0, "red");
        assert_eq!(p.key().as_str(), "1.5,-2");

        let q = Point::new(1.5000001, -2.0, "red");
        assert_ne!(p.key(), q.key());
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        assert!(Point::try_new(f64::NAN, 0.0, "a").is_err());
        assert!(Point::try_new(0.0, f64::INFINITY, "a").is_err());
        assert!(Point::try_new(0.0, 0.0, "  ").is_err());
        assert!(Point::try_new(0.0, 0.0, "a").is_ok());
    }

    #[test]
    fn test_distance() {
        let p = Point::new(0.0, 0.0, "a");
        assert_eq!(p.distance_to(3.0, 4.0), 5.0);
        assert_eq!(p.distance_to(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_display() {
        let p = Point::new(0.5, 3.0, "blue");
        assert_eq!(p.to_string(), "[0.5, 3, class = blue]");
    }

    #[test]
    fn test_serde_field_names() {
        let p = Point::new(1.0, 2.0, "green");
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value, serde_json::json!({"x": 1.0, "y": 2.0, "class_name": "green"}));
    }
}
