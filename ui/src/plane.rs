use geom::{Circle, Distance, Line, Pt2D};
use widgetry::{Color, GeomBatch};

use pendulum_model::{Point, RenderSink};

// The visible part of the Cartesian plane. It never rescales.
const MIN: f64 = -2.0;
const MAX: f64 = 2.0;
const GRID_STEP: f64 = 0.5;
/// Map-space units per simulation length unit
const SCALE: f64 = 100.0;

const LINE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 6.0;

/// Map space has y pointing down; the plane has it pointing up.
pub fn to_map(pt: Point) -> Pt2D {
    Pt2D::new((pt.x - MIN) * SCALE, (MAX - pt.y) * SCALE)
}

pub fn map_dims() -> (f64, f64) {
    let size = (MAX - MIN) * SCALE;
    (size, size)
}

pub fn center() -> Pt2D {
    to_map(Point::ORIGIN)
}

/// Grid lines, with the two axes emphasized
pub fn draw_grid() -> GeomBatch {
    let mut batch = GeomBatch::new();
    let steps = ((MAX - MIN) / GRID_STEP).round() as usize;
    for i in 0..=steps {
        let v = MIN + (i as f64) * GRID_STEP;
        let (color, width) = if v == 0.0 {
            (Color::grey(0.8), 1.5)
        } else {
            (Color::grey(0.3), 0.5)
        };
        for line in [
            Line::must_new(to_map(Point::new(v, MIN)), to_map(Point::new(v, MAX))),
            Line::must_new(to_map(Point::new(MIN, v)), to_map(Point::new(MAX, v))),
        ] {
            batch.push(color, line.make_polygons(Distance::meters(width)));
        }
    }
    batch
}

/// A line through every point, with a marker on each one.
pub fn draw_polyline(points: &[Point]) -> GeomBatch {
    let mut batch = GeomBatch::new();
    let pts: Vec<Pt2D> = points.iter().map(|pt| to_map(*pt)).collect();
    for pair in pts.windows(2) {
        // Two loads can sit on top of each other
        if let Ok(line) = Line::new(pair[0], pair[1]) {
            batch.push(
                Color::CYAN,
                line.make_polygons(Distance::meters(LINE_WIDTH)),
            );
        }
    }
    for pt in pts {
        batch.push(
            Color::CYAN,
            Circle::new(pt, Distance::meters(MARKER_RADIUS)).to_polygon(),
        );
    }
    batch
}

/// Collects one frame at a time. The viewer picks up whatever was last presented and uploads it.
#[derive(Default)]
pub struct Plane {
    polyline: Vec<Point>,
    label: String,
    presented: Option<(GeomBatch, String)>,
}

impl Plane {
    pub fn take_presented(&mut self) -> Option<(GeomBatch, String)> {
        self.presented.take()
    }
}

impl RenderSink for Plane {
    fn set_polyline(&mut self, points: &[Point]) {
        self.polyline = points.to_vec();
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn present(&mut self) {
        self.presented = Some((draw_polyline(&self.polyline), self.label.clone()));
    }
}
