use crate::config::GeneratorConfig;
use crate::errors::InvalidDesignation;
use crate::serialize::point3_seq;
use itertools::Itertools;
use ncollide2d::na::{Point2, Point3};
use serde::Serialize;
use tracing::debug;

pub mod designation;
pub mod generate;

use generate::AirfoilGenerator;

/// Camber point and upper/lower surface points at one chordwise station, in chord coordinates
/// (leading edge at x = 0.0, trailing edge at x = 1.0)
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// The raw output of a generator. `upper` and `camber` run from the leading edge to the trailing
/// edge, while `lower` runs from the trailing edge back to the leading edge, so that `upper`
/// followed by `lower` traces the section as a single closed loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    pub camber: Vec<Point3<f64>>,
    pub upper: Vec<Point3<f64>>,
    pub lower: Vec<Point3<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation], chord_offset: f64) -> Airfoil {
        let shifted = |p: &Point2<f64>| Point3::new(p.x - chord_offset, p.y, 0.0);

        Airfoil {
            camber: stations.iter().map(|s| shifted(&s.camber)).collect(),
            upper: stations.iter().map(|s| shifted(&s.upper)).collect(),
            lower: stations.iter().rev().map(|s| shifted(&s.lower)).collect(),
        }
    }

    pub fn to_outer_contour(&self) -> Vec<Point3<f64>> {
        let mut result = self.upper.to_vec();
        result.extend_from_slice(&self.lower);
        result
    }

    /// The chord segment, taken from the first and last points of the upper surface. Empty if
    /// the airfoil has no stations.
    pub fn chord(&self) -> Vec<Point3<f64>> {
        match (self.upper.first(), self.upper.last()) {
            (Some(leading), Some(trailing)) => vec![*leading, *trailing],
            _ => Vec::new(),
        }
    }

    pub fn assemble(self) -> FoilGeometry {
        FoilGeometry {
            outline: self.to_outer_contour(),
            chord: self.chord(),
            camber: self.camber,
        }
    }
}

/// The three point sequences handed to a renderer: the outline, drawn as a closed loop, and the
/// camber and chord lines, drawn as line strips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoilGeometry {
    #[serde(serialize_with = "point3_seq")]
    pub outline: Vec<Point3<f64>>,

    #[serde(serialize_with = "point3_seq")]
    pub camber: Vec<Point3<f64>>,

    #[serde(serialize_with = "point3_seq")]
    pub chord: Vec<Point3<f64>>,
}

impl FoilGeometry {
    pub fn outline_vertices(&self) -> Vec<f32> {
        flatten(&self.outline)
    }

    pub fn camber_vertices(&self) -> Vec<f32> {
        flatten(&self.camber)
    }

    pub fn chord_vertices(&self) -> Vec<f32> {
        flatten(&self.chord)
    }

    /// Lower left and upper right corners of the box enclosing the outline
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let (x0, x1) = self
            .outline
            .iter()
            .map(|p| p.x)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()?;
        let (y0, y1) = self
            .outline
            .iter()
            .map(|p| p.y)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()?;

        Some((Point2::new(x0, y0), Point2::new(x1, y1)))
    }
}

/// Flattens points into the packed `x, y, z` single precision layout used by vertex buffers
fn flatten(points: &[Point3<f64>]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

/// Parses a designation and generates its outline, camber line and chord. Nothing is retained
/// between calls; every call returns freshly computed sequences.
pub fn generate_geometry(
    designation: &str,
    config: &GeneratorConfig,
) -> Result<FoilGeometry, InvalidDesignation> {
    let naca = designation::parse(designation)?;
    debug!(
        %naca,
        m = naca.max_camber(),
        p = naca.max_camber_chord(),
        t = naca.t_max(),
        divisions = config.divisions.get(),
        "generating NACA 4 series airfoil"
    );

    Ok(naca.generate(config.divisions, config.chord_offset).assemble())
}
