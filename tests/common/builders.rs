//! Test data builders for creating payload values

use serde_json::{json, Value};

/// Builder for multi-group series payloads (rmsds, tmscores)
pub struct GroupSeriesBuilder {
    entries: Vec<Value>,
}

impl GroupSeriesBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn group(mut self, reference: &str, group: Option<&str>, values: &[f64]) -> Self {
        let mut entry = json!({
            "reference": reference,
            "values": values,
        });
        if let Some(group) = group {
            entry["group"] = json!(group);
        }
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Value {
        json!({ "data": self.entries })
    }
}

/// Builder for stat-series payload objects
pub struct StatSeriesBuilder {
    data: Vec<f64>,
    stats: Option<(f64, f64, f64, f64)>,
}

impl StatSeriesBuilder {
    pub fn new(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
            stats: None,
        }
    }

    pub fn stats(mut self, average: f64, stddev: f64, min: f64, max: f64) -> Self {
        self.stats = Some((average, stddev, min, max));
        self
    }

    pub fn build(self) -> Value {
        let mut value = json!({ "data": self.data });
        if let Some((average, stddev, min, max)) = self.stats {
            value["average"] = json!(average);
            value["stddev"] = json!(stddev);
            value["min"] = json!(min);
            value["max"] = json!(max);
        }
        value
    }
}

/// A square matrix payload where cell (i, j) is `|i - j| * scale`
pub fn distance_matrix(size: usize, scale: f64) -> Value {
    let rows: Vec<Vec<f64>> = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| (i as f64 - j as f64).abs() * scale)
                .collect()
        })
        .collect();
    json!(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_series_builder() {
        let payload = GroupSeriesBuilder::new()
            .group("5VBL", Some("backbone"), &[0.1, 0.2])
            .group("firstframe", None, &[0.3])
            .build();

        let entries = payload["data"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["reference"], "5VBL");
        assert_eq!(entries[0]["group"], "backbone");
        assert!(entries[1].get("group").is_none());
    }

    #[test]
    fn test_stat_series_builder() {
        let payload = StatSeriesBuilder::new(&[1.0, 2.0])
            .stats(1.5, 0.5, 1.0, 2.0)
            .build();
        assert_eq!(payload["average"], 1.5);
        assert_eq!(payload["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_distance_matrix() {
        let matrix = distance_matrix(3, 2.0);
        assert_eq!(matrix[0][2], 4.0);
        assert_eq!(matrix[2][2], 0.0);
    }
}
