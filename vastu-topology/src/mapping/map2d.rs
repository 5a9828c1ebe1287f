//! Boolean obstacle map built from polar range readings.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{Result, TopologyError};
use crate::grid::{GridSource, PassabilityGrid};

use super::angle::Angle;

/// One range reading, relative to the sensor heading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeSample {
    /// Bearing relative to the sensor heading
    pub angle: Angle,
    /// Measured distance in centimeters
    pub distance_cm: f32,
}

impl RangeSample {
    /// Create a new sample
    pub fn new(angle: Angle, distance_cm: f32) -> Self {
        Self { angle, distance_cm }
    }
}

/// Fixed-size obstacle map with a movable sensor.
///
/// Cells start free. Range readings taken from the sensor position mark the
/// cell they land on as an obstacle. Distances are given in centimeters and
/// converted with `scale_cm` (centimeters per cell).
///
/// Projection of a reading at map angle `a` and distance `d`:
///
/// ```text
/// col = sensor.col + round(sin(a) · d / scale)
/// row = sensor.row + round(cos(a) · d / scale)
/// ```
#[derive(Clone, Debug)]
pub struct OccupancyMap2D {
    width: usize,
    height: usize,
    scale_cm: f32,
    max_range_cm: f32,
    /// Row-major, `true` = obstacle
    cells: Vec<bool>,
    sensor: GridCoord,
    heading: Angle,
}

impl OccupancyMap2D {
    /// Create an empty `width × height` map with the sensor in the center.
    pub fn new(width: usize, height: usize, scale_cm: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TopologyError::MalformedGrid(format!(
                "map must have at least one cell, got {}x{}",
                width, height
            )));
        }
        if !(scale_cm.is_finite() && scale_cm > 0.0) {
            return Err(TopologyError::MalformedGrid(format!(
                "map scale must be positive, got {} cm/cell",
                scale_cm
            )));
        }
        Ok(Self {
            width,
            height,
            scale_cm,
            max_range_cm: f32::INFINITY,
            cells: vec![false; width * height],
            sensor: GridCoord::new(height / 2, width / 2),
            heading: Angle::ZERO,
        })
    }

    /// Builder-style setter for the sweep range cutoff.
    pub fn with_max_range_cm(mut self, max_range_cm: f32) -> Self {
        self.max_range_cm = max_range_cm;
        self
    }

    /// Map width (columns)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Map height (rows)
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Centimeters per cell
    #[inline]
    pub fn scale_cm(&self) -> f32 {
        self.scale_cm
    }

    /// Readings beyond this distance are ignored by [`integrate_sweep`](Self::integrate_sweep)
    #[inline]
    pub fn max_range_cm(&self) -> f32 {
        self.max_range_cm
    }

    /// Cell the sensor is in
    #[inline]
    pub fn sensor_position(&self) -> GridCoord {
        self.sensor
    }

    /// Sensor heading in map angles
    #[inline]
    pub fn sensor_heading(&self) -> Angle {
        self.heading
    }

    /// Place the sensor. Returns false (and leaves it) if `coord` is off the map.
    pub fn set_sensor_position(&mut self, coord: GridCoord) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.sensor = coord;
        true
    }

    /// Set the absolute sensor heading
    pub fn set_sensor_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }

    /// Turn the sensor by `delta`
    pub fn rotate_sensor(&mut self, delta: Angle) {
        self.heading += delta;
    }

    /// Move the sensor `distance_cm` along map angle `angle`.
    ///
    /// If the target cell is off the map nothing changes, including the
    /// heading. Otherwise the heading is set to `angle` when `set_heading`.
    pub fn move_sensor(&mut self, angle: Angle, distance_cm: f32, set_heading: bool) -> bool {
        let Some(target) = self.project(angle, distance_cm) else {
            trace!(
                "[Map2D] move {} by {:.1}cm from {} leaves the map",
                angle, distance_cm, self.sensor
            );
            return false;
        };
        self.sensor = target;
        if set_heading {
            self.heading = angle;
        }
        true
    }

    /// Mark the cell `distance_cm` from the sensor along map angle `angle`.
    ///
    /// Returns whether the point landed on the map.
    pub fn mark_obstacle(&mut self, angle: Angle, distance_cm: f32) -> bool {
        match self.project(angle, distance_cm) {
            Some(coord) => {
                let idx = self.index(coord);
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Mark a batch of readings taken at the current heading.
    ///
    /// Returns the number of readings that were marked.
    pub fn integrate_sweep(&mut self, samples: &[RangeSample]) -> usize {
        let mut marked = 0;
        let mut skipped = 0;
        for sample in samples {
            if !(sample.distance_cm <= self.max_range_cm) {
                skipped += 1;
                continue;
            }
            if self.mark_obstacle(self.heading + sample.angle, sample.distance_cm) {
                marked += 1;
            }
        }
        debug!(
            "[Map2D] sweep from {} heading {}: {} marked, {} out of range, {} off map",
            self.sensor,
            self.heading,
            marked,
            skipped,
            samples.len() - marked - skipped
        );
        marked
    }

    /// Whether `coord` is on the map and marked
    pub fn is_obstacle(&self, coord: GridCoord) -> bool {
        self.contains(coord) && self.cells[self.index(coord)]
    }

    /// Number of marked cells
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Reset every cell to free. Sensor pose is kept.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Snapshot as a passability grid (free cells traversable).
    pub fn passability(&self) -> Result<PassabilityGrid> {
        let rows: Vec<Vec<bool>> = self
            .cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&obstacle| !obstacle).collect())
            .collect();
        PassabilityGrid::from_rows(&rows)
    }

    #[inline]
    fn contains(&self, coord: GridCoord) -> bool {
        coord.within(self.height, self.width)
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> usize {
        coord.row * self.width + coord.col
    }

    fn project(&self, angle: Angle, distance_cm: f32) -> Option<GridCoord> {
        if !distance_cm.is_finite() {
            return None;
        }
        let (sin, cos) = angle.radians().sin_cos();
        let d_col = (sin * distance_cm / self.scale_cm).round() as isize;
        let d_row = (cos * distance_cm / self.scale_cm).round() as isize;

        let row = self.sensor.row as isize + d_row;
        let col = self.sensor.col as isize + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        let coord = GridCoord::new(row as usize, col as usize);
        self.contains(coord).then_some(coord)
    }
}

impl GridSource for OccupancyMap2D {
    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn is_passable(&self, coord: GridCoord) -> bool {
        self.contains(coord) && !self.cells[self.index(coord)]
    }
}
