pub mod cli;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod matching;
pub mod orchestrator;
pub mod table;
