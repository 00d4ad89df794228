// Copyright 2025 RCE Visualizer Developers
// SPDX-License-Identifier: Apache-2.0

/*!
Dataset JSON I/O.

Accepted layouts on load:

```text
[ {"x": 1, "y": 2, "class_name": "red"}, ... ]                 record array
{ "data": { "1,2": {"x": 1, "y": 2, "class_name": "red"} } }   keyed wrapper (saved form)
{ "1,2": {"x": 1, "y": 2, "class_name": "red"} }               bare keyed object
```

Keys of keyed layouts are ignored and recomputed from the coordinates.
Coordinates may be numbers or numeric strings.
*/

use std::fs;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::{InputData, Point, StructuresError, StructuresResult};

/// Key wrapping the keyed records in the saved form
const DATA_KEY: &str = "data";

/// Load a dataset from a JSON file
pub fn load_dataset_from_file<P: AsRef<Path>>(path: P) -> StructuresResult<InputData> {
    let path = path.as_ref();
    let json_str = fs::read_to_string(path)?;
    let data = load_dataset_from_json(&json_str)?;
    info!(
        "📂 [DATASET] Loaded {} points ({} classes) from {}",
        data.len(),
        data.class_names().len(),
        path.display()
    );
    Ok(data)
}

/// Load a dataset from a JSON string
///
/// # Errors
///
/// - `Json` if the string is not valid JSON or has an unsupported top-level shape
/// - `InvalidRecord` if a record misses a field or carries a non-numeric coordinate
/// - `InvalidPoint` for non-finite coordinates or empty class names
/// - `AlreadyExists` if two records share the same `"x,y"` key
pub fn load_dataset_from_json(json_str: &str) -> StructuresResult<InputData> {
    let value: Value = serde_json::from_str(json_str)?;

    let records: Vec<&Value> = match &value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get(DATA_KEY) {
            Some(Value::Object(keyed)) => keyed.values().collect(),
            Some(Value::Array(items)) => items.iter().collect(),
            _ => map.values().collect(),
        },
        other => {
            return Err(StructuresError::Json(format!(
                "expected an array or object of point records, got {}",
                json_type_name(other)
            )))
        }
    };

    let mut data = InputData::new();
    for (index, record) in records.into_iter().enumerate() {
        let point = parse_record(index, record)?;
        data.add_point(point)?;
    }
    debug!("[DATASET] Parsed {} point records", data.len());
    Ok(data)
}

/// Save a dataset to a JSON file (keyed wrapper layout)
pub fn save_dataset_to_file<P: AsRef<Path>>(data: &InputData, path: P) -> StructuresResult<()> {
    let path = path.as_ref();
    let json_str = save_dataset_to_json(data)?;
    fs::write(path, json_str)?;
    info!("💾 [DATASET] Saved {} points to {}", data.len(), path.display());
    Ok(())
}

/// Serialize a dataset to the keyed wrapper layout, preserving insertion order
pub fn save_dataset_to_json(data: &InputData) -> StructuresResult<String> {
    Ok(serde_json::to_string_pretty(&DatasetFile {
        data: KeyedPoints(data),
    })?)
}

#[derive(Serialize)]
struct DatasetFile<'a> {
    data: KeyedPoints<'a>,
}

struct KeyedPoints<'a>(&'a InputData);

impl Serialize for KeyedPoints<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for point in self.0.iter() {
            map.serialize_entry(point.key().as_str(), point)?;
        }
        map.end()
    }
}

fn parse_record(index: usize, record: &Value) -> StructuresResult<Point> {
    let Value::Object(fields) = record else {
        return Err(StructuresError::InvalidRecord {
            index,
            reason: format!("expected an object, got {}", json_type_name(record)),
        });
    };

    let x = parse_coordinate(index, "x", fields.get("x"))?;
    let y = parse_coordinate(index, "y", fields.get("y"))?;
    let class_name = match fields.get("class_name") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(StructuresError::InvalidRecord {
                index,
                reason: format!("class_name must be a string, got {}", json_type_name(other)),
            })
        }
        None => {
            return Err(StructuresError::InvalidRecord {
                index,
                reason: "missing field 'class_name'".to_string(),
            })
        }
    };

    Point::try_new(x, y, class_name)
}

fn parse_coordinate(index: usize, field: &str, value: Option<&Value>) -> StructuresResult<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
        None => {
            return Err(StructuresError::InvalidRecord {
                index,
                reason: format!("missing field '{}'", field),
            })
        }
    };
    parsed.ok_or_else(|| StructuresError::InvalidRecord {
        index,
        reason: format!("field '{}' is not numeric", field),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
