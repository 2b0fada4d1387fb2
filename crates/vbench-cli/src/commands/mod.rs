pub mod deps;
pub mod list;
pub mod run;
