pub mod chart;
pub mod date;
pub mod formatting;
pub mod table;
