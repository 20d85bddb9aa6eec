use crate::airfoil::{generate_geometry, FoilGeometry};
use crate::config::GeneratorConfig;
use crate::errors::InvalidDesignation;
use tracing::{info, warn};

/// Placeholder shapes shown before the first airfoil is generated
const INITIAL_OUTLINE: [f32; 9] = [0.5, -0.5, 0.0, -0.5, -0.5, 0.0, 0.0, 0.5, 0.0];
const INITIAL_CAMBER: [f32; 9] = [0.5, 0.5, 0.0, -0.5, 0.5, 0.0, 0.0, -0.5, 0.0];
const INITIAL_CHORD: [f32; 9] = [0.25, 0.25, 0.0, -0.25, 0.25, 0.0, 0.0, -0.25, 0.0];

/// Vertex data owned by a renderer for the outline, camber line and chord. The arrays are packed
/// `x, y, z` triples. A successful regeneration overwrites all three and bumps the revision so
/// the owner knows to upload them again; a rejected designation leaves everything untouched.
pub struct FoilBuffers {
    config: GeneratorConfig,
    outline: Vec<f32>,
    camber: Vec<f32>,
    chord: Vec<f32>,
    designation: Option<String>,
    revision: u64,
}

impl FoilBuffers {
    pub fn new(config: GeneratorConfig) -> FoilBuffers {
        FoilBuffers {
            config,
            outline: INITIAL_OUTLINE.to_vec(),
            camber: INITIAL_CAMBER.to_vec(),
            chord: INITIAL_CHORD.to_vec(),
            designation: None,
            revision: 0,
        }
    }

    /// Generates the airfoil for `designation` and replaces the vertex data with it, returning
    /// the geometry that was written.
    pub fn regenerate(&mut self, designation: &str) -> Result<FoilGeometry, InvalidDesignation> {
        let geometry = match generate_geometry(designation, &self.config) {
            Ok(g) => g,
            Err(e) => {
                warn!(designation, error = %e, "enter a valid NACA airfoil number");
                return Err(e);
            }
        };

        self.outline = geometry.outline_vertices();
        self.camber = geometry.camber_vertices();
        self.chord = geometry.chord_vertices();
        self.designation = Some(designation.to_string());
        self.revision += 1;

        info!(
            designation,
            revision = self.revision,
            outline = self.outline_len(),
            "regenerated airfoil buffers"
        );

        Ok(geometry)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn outline(&self) -> &[f32] {
        &self.outline
    }

    pub fn camber(&self) -> &[f32] {
        &self.camber
    }

    pub fn chord(&self) -> &[f32] {
        &self.chord
    }

    /// Number of vertices in the outline loop
    pub fn outline_len(&self) -> usize {
        self.outline.len() / 3
    }

    /// The designation currently held, or `None` while the placeholders are shown
    pub fn designation(&self) -> Option<&str> {
        self.designation.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for FoilBuffers {
    fn default() -> Self {
        FoilBuffers::new(GeneratorConfig::default())
    }
}
