// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// GPU / graphics allowances — casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Float comparison: graphics math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
// Pedantic/nursery allowances, matching the crate's style
#![allow(clippy::default_trait_access)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]

//! Small GPU scene viewer built on wgpu.
//!
//! Faceta renders a static lit scene — a square-based pyramid, a hexagonal
//! prism, and two point-light marker cubes — navigated with a first-person
//! fly camera (WASD to move, mouse to look, scroll wheel to zoom).
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - standalone window and event loop
//! - [`engine::SceneRenderEngine`] - the rendering engine
//! - [`camera::core::Camera`] - the fly camera
//! - [`options::Options`] - runtime configuration (window, camera,
//!   lighting, scene)
//!
//! # Architecture
//!
//! The viewer owns a winit window and forwards events to the engine. The
//! engine owns the GPU context, the camera controller, and one renderer per
//! scene element; each frame it integrates held-key movement, uploads the
//! camera and lighting uniforms, and records a single render pass.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod lighting;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod viewer;
