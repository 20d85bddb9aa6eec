use crate::airfoil::{Airfoil, CamberStation};
use ncollide2d::na::Point2;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Chordwise position of station `i` out of `divisions` using cosine spacing. Station 0 is the
/// leading edge (x = 0.0) and station `divisions` is the trailing edge (x = 1.0), with the
/// stations bunched up towards both ends where the surface curvature is highest.
pub fn cosine_station(i: usize, divisions: NonZeroUsize) -> f64 {
    (1.0 - (PI * (i as f64 / divisions.get() as f64)).cos()) / 2.0
}

/// All `divisions + 1` cosine spaced stations, from the leading edge to the trailing edge
pub fn cosine_stations(divisions: NonZeroUsize) -> impl Iterator<Item = f64> {
    (0..=divisions.get()).map(move |i| cosine_station(i, divisions))
}

/// An AirfoilGenerator is an entity which can generate the height and slope of the mean camber
/// line and the airfoil half thickness at fractions of the chord. This provides the information
/// necessary for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    /// Height of the camber line above the chord at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> f64;

    /// Slope of the camber line (dy/dx) at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Half of the airfoil thickness, measured normal to the camber line, at a fraction from 0.0
    /// to 1.0
    fn thickness(&self, x: f64) -> f64;

    /// Computes the camber point and the upper and lower surface points at chord fraction `x`.
    /// The surface points are offset from the camber line along its normal.
    fn station_at(&self, x: f64) -> CamberStation {
        let y_c = self.camber_line(x);
        let y_t = self.thickness(x);
        let theta = self.camber_slope(x).atan();

        CamberStation::new(
            Point2::new(x, y_c),
            Point2::new(x - y_t * theta.sin(), y_c + y_t * theta.cos()),
            Point2::new(x + y_t * theta.sin(), y_c - y_t * theta.cos()),
        )
    }

    /// Generates the airfoil at `divisions + 1` cosine spaced stations. The resulting points are
    /// shifted by `-chord_offset` along x, so an offset of 0.5 centers the chord on the origin.
    fn generate(&self, divisions: NonZeroUsize, chord_offset: f64) -> Airfoil {
        let stations: Vec<CamberStation> = cosine_stations(divisions)
            .map(|x| self.station_at(x))
            .collect();

        Airfoil::from_stations(&stations, chord_offset)
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4Digit {
    m: f64,
    p: f64,
    t: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    pub fn new(max_camber: f64, max_camber_chord: f64, t_max: f64) -> Naca4Digit {
        Naca4Digit {
            m: max_camber,
            p: max_camber_chord,
            t: t_max,
        }
    }

    pub fn max_camber(&self) -> f64 {
        self.m
    }

    pub fn max_camber_chord(&self) -> f64 {
        self.p
    }

    pub fn t_max(&self) -> f64 {
        self.t
    }

    /// A foil with no camber or with its max camber at the leading edge has a flat camber line
    pub fn is_symmetric(&self) -> bool {
        self.m == 0.0 || self.p == 0.0
    }
}

impl Display for Naca4Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NACA {}{}{:02}",
            (self.m * 100.0).round(),
            (self.p * 10.0).round(),
            (self.t * 100.0).round()
        )
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x <= self.p {
            (self.m / self.p.powi(2)) * (2.0 * self.p * x - x.powi(2))
        } else {
            (self.m / (1.0 - self.p).powi(2))
                * ((1.0 - 2.0 * self.p) + 2.0 * self.p * x - x.powi(2))
        }
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            0.0
        } else if x <= self.p {
            ((2.0 * self.m) / self.p.powi(2)) * (self.p - x)
        } else {
            ((2.0 * self.m) / (1.0 - self.p).powi(2)) * (self.p - x)
        }
    }

    fn thickness(&self, x: f64) -> f64 {
        5.0 * self.t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4))
    }
}
