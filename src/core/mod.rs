pub mod import;
pub mod payroll;
pub mod stats;
