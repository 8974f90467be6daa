pub mod add;
pub mod calculator;
pub mod calendar;
pub mod config;
pub mod del;
pub mod geo;
pub mod import;
pub mod log;
pub mod schedule;
pub mod suggest;
pub mod trace;
