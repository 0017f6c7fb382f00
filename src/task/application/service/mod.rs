pub mod task_monitor;
