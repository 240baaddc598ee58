//! Platform-agnostic core for the rover's radio-control receiver.
//!
//! This crate provides the pieces the protocol and platform crates plug
//! into, without touching real hardware:
//!
//! - [`types`]: Core data structures ([`ChannelReading`], [`RcCommand`],
//!   [`ChassisTarget`])
//! - [`link`]: Blocking serial link trait ([`SerialLink`])
//! - [`decoder`]: Frame decoder trait ([`FrameDecoder`]) and the recoverable
//!   decode error taxonomy
//! - [`chassis`]: The narrow chassis contract ([`Chassis`])
//! - [`config`]: Connection parameters and protocol selection
//! - [`mapping`]: Channel-to-command mapping (steering, throttle, turn radius)
//! - [`glitch`]: Glitch rejection for the ASCII sentence link
//! - [`reader`]: The decode/command control loop ([`RcLoop`])
//!
//! # Overview
//!
//! A [`FrameDecoder`] turns bytes from a [`SerialLink`] into timestamped
//! [`ChannelReading`]s. The [`RcLoop`] drives one decoder against one
//! [`Chassis`]: it drains stale input, decodes a reading per cycle, maps it
//! to a steering/throttle command, and enforces the 2-second failsafe that
//! forces RC input off when the transmitter goes quiet.

pub mod chassis;
pub mod config;
pub mod decoder;
pub mod glitch;
pub mod link;
pub mod mapping;
pub mod reader;
pub mod types;

// Re-export main types at crate root
pub use chassis::Chassis;
pub use config::{ConnectionConfig, Parity, Protocol};
pub use decoder::{DecodeError, FrameDecoder};
pub use glitch::GlitchFilter;
pub use link::{LinkError, SerialLink};
pub use mapping::RadiusLimits;
pub use reader::{RcLoop, RunState, ENABLE_TIMEOUT, MIN_SAMPLE_INTERVAL};
pub use types::{ChannelReading, ChannelValues, ChassisTarget, RcCommand};
