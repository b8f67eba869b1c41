//! Grid construction settings.

/// Parameters for [`Grid::with_config`](crate::Grid::with_config).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
    /// Chance that any given cell is a wall.
    pub obstacle_probability: f64,
    /// Force the top-left and bottom-right corners to be passable.
    pub keep_corners_open: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 20,
            rows: 20,
            obstacle_probability: 0.2,
            keep_corners_open: true,
        }
    }
}

impl GridConfig {
    /// Default settings with the given dimensions.
    pub fn sized(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// Set the wall probability (builder).
    pub fn with_obstacle_probability(mut self, p: f64) -> Self {
        self.obstacle_probability = p;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: GridConfig = serde_json::from_str(r#"{"cols": 8}"#).unwrap();
        assert_eq!(cfg.cols, 8);
        assert_eq!(cfg.rows, 20);
        assert_eq!(cfg.obstacle_probability, 0.2);
        assert!(cfg.keep_corners_open);
    }
}
