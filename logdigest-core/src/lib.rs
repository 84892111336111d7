pub mod cli;
pub mod conf;
pub mod digest;
pub mod emit;
pub mod gateway;
pub mod logging;
pub mod run;
