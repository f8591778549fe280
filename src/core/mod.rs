pub mod add;
pub mod recap;
pub mod report;
