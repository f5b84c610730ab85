//! # Trueno-Raster
//!
//! Pure Rust 2D rasterization and geometry kernel.
//!
//! Converts geometric primitives into ordered integer pixel sequences,
//! transforms primitive control points, and clips line segments against an
//! axis-aligned window. Every operation is a pure function over a point
//! list: no shared state, no I/O, safe to call from any number of threads.
//!
//! ## Features
//!
//! - **Lines**: naive, DDA and Bresenham rasterization
//! - **Polygons**: closed outlines built from line edges
//! - **Ellipses**: midpoint algorithm over a bounding box
//! - **Curves**: Bézier (De Casteljau) and uniform cubic B-spline (Cox–de Boor)
//! - **Transforms**: translate, rotate about a pivot, scale about a pivot
//! - **Clipping**: Cohen–Sutherland and Liang–Barsky
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.len(), 6);
//!
//! let clipped = clip_line(
//!     Point::new(-5, 5),
//!     Point::new(15, 5),
//!     Point::new(0, 0),
//!     Point::new(10, 10),
//!     ClipAlgorithm::LiangBarsky,
//! );
//! assert_eq!(clipped, Segment::new(Point::new(0, 5), Point::new(10, 5)));
//! ```
//!
//! ## Rounding
//!
//! "Round to nearest" always means ties-to-even. The naive line algorithm
//! and accepted Cohen–Sutherland endpoints truncate toward zero instead.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade at `trace`/`debug` level. The
//! library never installs a logger.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Algorithm selectors for each primitive family.
pub mod algorithm;

/// Color attribute carried by primitives.
pub mod color;

/// Pixel canvas for painting rasterizer output.
pub mod framebuffer;

/// Geometric primitives (points, segments, clip windows).
pub mod geometry;

// ============================================================================
// Kernel Modules
// ============================================================================

/// Rasterizers and curve evaluation.
pub mod render;

/// Affine transforms on control points.
pub mod transform;

/// Line clipping.
pub mod clip;

/// Tagged primitives dispatching to the kernel.
pub mod primitive;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
    pub use crate::clip::{clip_line, clip_segment};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipWindow, Point, PointF, Segment};
    pub use crate::primitive::{Primitive, Shape};
    pub use crate::render::{
        evaluate_curve, rasterize_ellipse, rasterize_line, rasterize_polygon, CurveSampler,
        Drawable,
    };
    pub use crate::transform::{rotate, scale, translate, Angle};
}

// ============================================================================
// Tests
// ============================================================================
