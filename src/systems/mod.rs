//! Systems and system parameters of the debug overlay.
//!
//! - [`target`] – [`Targets`](target::Targets), the uniform position/scale/bounds view of targets
//! - [`debugmode`] – [`DebugOverlay`](debugmode::DebugOverlay), mode transitions and target lifecycle
//! - [`drag`] – drag controller
//! - [`handles`] – resize handle sets
//! - [`indicator`] – position/scale indicator overlay
//! - [`input`] – debug key and pointer gesture systems
pub mod debugmode;
pub mod drag;
pub mod handles;
pub mod indicator;
pub mod input;
pub mod target;
