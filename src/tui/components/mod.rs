//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `PageBody`: document state, callback activity and the settings panel
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames:
//! - `EditorHeaderBar`: title and action buttons, remembers button hit areas
//! - `ConfirmPopover`: delete confirmation, maps keys and clicks to a decision
//! - `ToastManager`: transient notices with expiry
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. The header never sees `App`; it draws a `HeaderView` computed by
//! `core::view::render`:
//!
//! ```rust,ignore
//! let view = app.header_view();
//! EditorHeaderBar::new(&view, screen, &mut tui.header).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── editor_header.rs    (title + button group)
//! ├── confirm_popover.rs  (delete confirmation overlay)
//! ├── toast.rs            (status line notices)
//! └── page_body.rs        (everything under the header)
//! ```

pub mod confirm_popover;
pub mod editor_header;
pub mod page_body;
pub mod toast;

pub use confirm_popover::{ConfirmEvent, ConfirmPopover, ConfirmPopoverState};
pub use editor_header::{EditorHeaderBar, EditorHeaderState};
pub use page_body::PageBody;
pub use toast::ToastManager;
