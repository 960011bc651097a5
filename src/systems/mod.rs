pub mod layout;
pub mod timer;

pub use layout::{LayoutProbe, StaticLayout};
pub use timer::{IdleScheduler, ManualScheduler, TimerToken};
