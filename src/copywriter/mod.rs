//! Template-driven sales copy built from an extracted description.

pub mod profiles;
pub mod render;

pub use profiles::{DEFAULT_PLATFORM, DEFAULT_TONE, PlatformProfile, ToneProfile};
pub use render::{CopyOptions, SalesCopy, render};
