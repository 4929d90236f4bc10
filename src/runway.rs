pub mod queue;
pub mod takeoff_log;
