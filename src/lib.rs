//! Local, deterministic signal analysis for a wellness companion.
//!
//! Voice recordings are framed into loudness and zero-crossing statistics and mapped to a tone.
//! Journal text, situational check-ins and stored tone history feed a wellness score, a stress
//! level, suggestions and a seven-day forecast. Every analysis function borrows an immutable
//! snapshot and returns a plain value.

pub mod audio;
pub mod badges;
pub mod config;
pub mod dashboard;
pub mod decode;
pub mod forecast;
pub mod frames;
pub mod logging;
pub mod metrics;
pub mod mode;
pub mod reflection;
pub mod state;
pub mod suggestions;
pub mod text_tone;
pub mod tone;
pub mod wellness;
