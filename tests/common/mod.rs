
// Re-export
pub use assertions::{
    assert_axes_ordered, assert_loads_valid, assert_perpendicular, assert_vector_finite,
};

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
