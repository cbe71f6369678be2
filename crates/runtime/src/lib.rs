//! Runtime wiring for the gesture recognizer.
//!
//! This crate connects the pure recognizer in `gesture-core` to the rest of a
//! game: oracle implementations for gating, a topic-based event bus for
//! outcomes, and a registry of actions bound to template names. Consumers
//! build a [`GestureSession`] and feed it pointer input.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`handlers`] binds game actions to accepted shapes
//! - [`oracle`] provides inventory and target adapters
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, RecognitionEvent, RecordingEvent, Topic};
pub use handlers::{CastContext, CastHandler, CastRegistry};
pub use oracle::{InventoryOracleImpl, OracleManager, TaggedRegion, TargetOracleImpl};
pub use session::{GestureSession, PointerInput, SessionBuilder};
