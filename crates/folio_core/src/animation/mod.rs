//! Decorative animation state for the landing page.
//!
//! Nothing here owns a timer. Each component keeps a [`Ticker`] and the host
//! calls `poll(now, rng)` from its own frame or event loop; `stop` drops all
//! pending work, so an animation can be torn down and restarted freely.

mod name;
mod shapes;
mod ticker;

pub use name::{NAME_INTERVAL, NameHighlighter};
pub use shapes::{
    BINARY_SIZES, BOX_SIZES, BackgroundShapes, PALETTE, SHAPE_COUNT, SHAPE_INTERVAL, Shape,
    ShapeGenerator, ShapeKind,
};
pub use ticker::Ticker;
