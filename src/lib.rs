// -- Lint policy ---------------------------------------------------------
// Crate-wide lints live in Cargo.toml under [workspace.lints]; these mirror
// the ones that must also hold for doc builds.

// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]

//! Trackball and fly camera controllers for interactive 3D viewers.
//!
//! Pointer positions are lifted onto a virtual sphere in front of the
//! screen; dragging rotates the scene by the arc between successive
//! samples, secondary drags pan it in the camera's frame, and scrolling
//! zooms. The resulting view matrix is written into any type implementing
//! [`camera::CameraBase`], so the controllers stay independent of the
//! renderer.
//!
//! # Key entry points
//!
//! - [`camera::Trackball`] - rotation, pan, and zoom controller
//! - [`camera::FlyCamera`] - first-person yaw/pitch camera
//! - [`input::InputProcessor`] - turns [`input::InputEvent`]s into
//!   [`command::NavCommand`]s
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Usage
//!
//! ```ignore
//! let mut trackball = Trackball::new(Viewport::from_size(800.0, 600.0));
//! let mut input = InputProcessor::new();
//!
//! for cmd in input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 }) {
//!     trackball.execute(cmd);
//! }
//! let view = trackball.view_matrix();
//! ```

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{Camera, CameraBase, FlyCamera, Trackball, Viewport};
pub use command::NavCommand;
pub use error::NavError;
pub use options::Options;
