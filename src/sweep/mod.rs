pub mod axis;
pub mod engine;
pub mod result;

pub use axis::SweepAxis;
pub use engine::{par_sweep, sweep};
pub use result::SweepResult;
