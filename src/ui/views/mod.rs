pub mod config;
pub mod deploy;
pub mod run;
pub mod scan;
