pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod messages;
pub mod ports;
mod service;
pub mod viewmodel;

pub use app::{connect, DeckBuilderApp};
pub use app_core::*;
pub use domain::{
    RequestField, RequestSeq, RequestTracker, Requests, StagedName, Step, WorkflowState,
};
pub use kernel::AppKernel;
pub use ports::*;
pub use viewmodel::*;

pub use deckforge_core::{BuiltDeck, Card, DeckFormat};
