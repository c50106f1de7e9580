//! LocalAuth TUI - terminal rendition of the biometric login screen
//!
//! Drives the `localauth-core` state machine from a single-threaded event
//! loop: keyboard input, ticks, and marshalled adapter results all arrive
//! over one channel, so transitions never overlap.

pub mod app;
pub mod device;
pub mod ui;

pub use app::App;
