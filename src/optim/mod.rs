pub mod optimizer;
pub mod schedule;

pub use optimizer::{DecayPolicy, Optimizer};
pub use schedule::{LrSchedule, ScheduleStep};
