use iter_num_tools::lin_space;
use more_asserts::assert_gt;
use serde::{Deserialize, Serialize};

/**
 * Uniform time sampling over `[0, t_final]`, matching the grid that the
 * response plot and the CSV export share. Both endpoints are included.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct TimeGrid {
    pub t_final: f64,
    pub sample_count: usize,
}

impl TimeGrid {
    pub fn samples(&self) -> Vec<f64> {
        assert_gt!(self.t_final, 0.0, "`t_final` must be positive!");
        assert_gt!(self.sample_count, 1, "`sample_count` must be at least 2!");
        lin_space(0.0..=self.t_final, self.sample_count).collect()
    }
}
