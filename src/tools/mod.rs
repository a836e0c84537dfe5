pub mod scheduler;

pub use scheduler::{ManualScheduler, Scheduler, Task, TokioScheduler};
