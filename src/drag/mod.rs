//! Drop target resolution while a floating window is dragged
//!
//! A [`DragSession`] narrows the cursor position down in three steps: the
//! topmost host under the cursor, the areas of that host containing it, and
//! the first target of those areas under it. Every transition is reported as
//! an [`OverlayEvent`] for the host UI to render.

pub mod host;
pub mod session;
pub mod target;

pub use host::{collect_areas, collect_hosts, hit_test_screen, DropHost, HostId};
pub use session::{DragSession, DragState, OverlayEvent};
pub use target::{AreaKind, DropArea, DropTarget};
