//! Floating background shapes.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;

use super::Ticker;

/// Shapes generated per refresh.
pub const SHAPE_COUNT: usize = 50;

/// How often the whole set is regenerated.
pub const SHAPE_INTERVAL: Duration = Duration::from_millis(4000);

/// Colours shapes are drawn in.
pub const PALETTE: [&str; 10] = [
    "#2A4494", "#4A90E2", "#6BB6FF", "#8B5CF6", "#06B6D4", "#10B981", "#F59E0B", "#EF4444",
    "#EC4899", "#84CC16",
];

/// Size classes for boxes, circles and triangles.
pub const BOX_SIZES: [&str; 5] = ["w-3 h-3", "w-4 h-4", "w-5 h-5", "w-6 h-6", "w-8 h-8"];

/// Text size classes for binary digits.
pub const BINARY_SIZES: [&str; 4] = ["text-sm", "text-base", "text-lg", "text-xl"];

/// What a shape is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled square
    Box,
    /// Filled circle
    Circle,
    /// Upward triangle
    Triangle,
    /// A single `0` or `1`
    Binary,
}

const KINDS: [ShapeKind; 4] = [
    ShapeKind::Box,
    ShapeKind::Circle,
    ShapeKind::Triangle,
    ShapeKind::Binary,
];

/// One decorative shape, positioned in percent of the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    /// Position in the generated set
    pub id: usize,
    /// Kind of shape
    pub kind: ShapeKind,
    /// CSS colour
    pub color: &'static str,
    /// Size class, from [`BINARY_SIZES`] for binary digits and [`BOX_SIZES`] otherwise
    pub size: &'static str,
    /// Horizontal position, `[0, 100)`
    pub x: f64,
    /// Vertical position, `[0, 100)`
    pub y: f64,
    /// Rotation in degrees, `[0, 360)`
    pub rotation: f64,
    /// The digit, binary shapes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<char>,
}

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Produces random shape sets.
#[derive(Debug, Clone, Copy)]
pub struct ShapeGenerator {
    count: usize,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self { count: SHAPE_COUNT }
    }
}

impl ShapeGenerator {
    /// A generator producing `count` shapes per set.
    pub fn with_count(count: usize) -> Self {
        Self { count }
    }

    /// Generate a fresh set of shapes.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Shape> {
        (0..self.count)
            .map(|id| {
                let kind = pick(rng, &KINDS);
                let color = pick(rng, &PALETTE);
                let size = match kind {
                    ShapeKind::Binary => pick(rng, &BINARY_SIZES),
                    _ => pick(rng, &BOX_SIZES),
                };
                let x = rng.gen_range(0.0..100.0);
                let y = rng.gen_range(0.0..100.0);
                let rotation = rng.gen_range(0.0..360.0);
                let content = match kind {
                    ShapeKind::Binary => Some(if rng.gen_bool(0.5) { '1' } else { '0' }),
                    _ => None,
                };

                Shape {
                    id,
                    kind,
                    color,
                    size,
                    x,
                    y,
                    rotation,
                    content,
                }
            })
            .collect()
    }
}

/// The background layer: the current shape set plus its refresh schedule.
#[derive(Debug, Clone)]
pub struct BackgroundShapes {
    generator: ShapeGenerator,
    ticker: Ticker,
    shapes: Vec<Shape>,
}

impl Default for BackgroundShapes {
    fn default() -> Self {
        Self::new(ShapeGenerator::default(), SHAPE_INTERVAL)
    }
}

impl BackgroundShapes {
    /// A stopped layer with no shapes.
    pub fn new(generator: ShapeGenerator, interval: Duration) -> Self {
        Self {
            generator,
            ticker: Ticker::new(interval),
            shapes: Vec::new(),
        }
    }

    /// Generate an initial set and start the refresh schedule.
    pub fn start<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        self.shapes = self.generator.generate(rng);
        self.ticker.start(now);
    }

    /// Stop refreshing. The last set stays visible.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Regenerate the set if the interval elapsed. Returns whether it did.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.shapes = self.generator.generate(rng);
        log::trace!("Regenerated {} background shapes", self.shapes.len());
        true
    }

    /// Whether the refresh schedule is running.
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// The current shapes.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
