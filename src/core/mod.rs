
pub mod credentials;
pub mod generator;
pub mod language;
pub mod logging;
pub mod wordgen;
