//! Interactive ink-drop background component.
//!
//! Renders pointer and touch interaction as spreading ink blots on an HTML
//! canvas:
//! - Continuous movement leaves a throttled trail of small drops
//! - Clicks and touch starts splash a burst of larger drops
//! - Blots accumulate on an offscreen trail layer that is partially erased
//!   each frame, leaving a residue that outlives the drops themselves
//! - The animation loop runs only while drops are alive or residue remains
//!
//! # Example
//!
//! ```ignore
//! use ink_field::InkFieldCanvas;
//!
//! view! { <InkFieldCanvas fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod drop;
mod engine;
mod rng;
mod surface;
pub mod theme;

pub use component::InkFieldCanvas;
pub use config::{FieldConfig, MotionTier};
pub use drop::{DropKind, InkDrop};
pub use engine::{InkField, InputSource};
pub use surface::{CanvasSurface, TrailSurface};
pub use theme::{Color, Palette, PaletteOverrides, PaletteSet};
