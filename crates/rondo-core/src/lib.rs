#![cfg_attr(not(test), no_std)]

//! Platform-agnostic core of the Rondo circular gallery: the carousel
//! state machine, autoplay scheduling, and image set providers.
//! Surfaces own all rendering and feed input through
//! [`input::InputProvider`].

pub mod app;
pub mod gallery;
pub mod input;
pub mod render;
