//! # Core Header Logic
//!
//! The editor header as a view-model. It knows nothing about any specific
//! UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • EditorHeader (state) │
//!                    │  • HeaderAction         │
//!                    │  • view::render (pure)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ HeaderHandlers / Dispatch
//!            ┌───────────────────┼───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  PageHost  │
//!     │  Adapter   │                          │ (callbacks)│
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`header`]: props, callbacks, `HeaderAction` and the header's `update()`
//! - [`view`]: pure mapping to a render description
//! - [`title`], [`pin`], [`document`]: the pieces of local state and flags
//! - [`theme`], [`layout`]: style table and responsive policy
//! - [`state`], [`action`]: the hosting page and its reducer
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod document;
pub mod header;
pub mod layout;
pub mod pin;
pub mod state;
pub mod theme;
pub mod title;
pub mod view;
