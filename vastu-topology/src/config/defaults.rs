//! Default value functions for serde deserialization.

pub fn max_pending_branches() -> usize {
    10
}

pub fn max_decision_nodes() -> usize {
    32
}

pub fn max_nodes() -> usize {
    64
}

pub fn max_edges() -> usize {
    128
}

pub fn steps_per_cell() -> usize {
    4
}

pub fn max_dimension() -> usize {
    128
}

pub fn map_size() -> usize {
    64
}

pub fn scale_cm() -> f32 {
    5.0
}

pub fn max_range_cm() -> f32 {
    1200.0
}
