//! Traitforge - Library for assembling generative character art
//!
//! This library provides functionality to:
//! - Order a character's traits into compositing order by priority
//! - Composite layered trait PNGs over a background image
//! - Remap trait vocabulary through rename tables
//! - Build looping GIFs, including glitch-art GIFs from a single image

pub mod assembler;
pub mod cli;
pub mod config;
pub mod gif;
pub mod glitch;
pub mod metadata;
pub mod models;
pub mod ordering;
pub mod output;
pub mod remap;
