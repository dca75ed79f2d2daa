pub mod benchmark_panel;
pub mod header;
pub mod stress_panel;
pub mod system_monitor;
