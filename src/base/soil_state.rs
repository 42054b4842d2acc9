use crate::Error;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the properties of the soil layer behind the wall and the wall displacement
///
/// Unit weights are given in kN/m³, lengths in m, the friction angle in degrees and
/// the cohesion in kPa.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilState {
    /// Height of the wall h (> 0)
    pub wall_height: f64,

    /// Effective friction angle φ′ in degrees (0 < φ′ < 90)
    pub friction_angle: f64,

    /// Dry unit weight γd (≥ 0)
    pub dry_unit_weight: f64,

    /// Saturated unit weight γsat (≥ γd)
    pub saturated_unit_weight: f64,

    /// Depth of the water table measured from the surface (0 ≤ dw ≤ h)
    pub water_table_depth: f64,

    /// Effective cohesion c′ (≥ 0)
    #[serde(default)]
    pub cohesion: f64,

    /// Normalized wall displacement u/h
    ///
    /// Negative values move the wall away from the soil (active side),
    /// positive values move the wall into the soil (passive side).
    pub displacement_ratio: f64,
}

impl SoilState {
    /// Returns the medium-dense sand used as the default layer
    ///
    /// h = 10, φ′ = 30°, γd = 18, γsat = 19, water table at the surface, no cohesion.
    pub fn sample_sand(displacement_ratio: f64) -> Self {
        SoilState {
            wall_height: 10.0,
            friction_angle: 30.0,
            dry_unit_weight: 18.0,
            saturated_unit_weight: 19.0,
            water_table_depth: 0.0,
            cohesion: 0.0,
            displacement_ratio,
        }
    }

    /// Checks all values and returns an error on the first inadmissible one
    pub fn validate(&self) -> Result<(), Error> {
        if !self.wall_height.is_finite() || self.wall_height <= 0.0 {
            return Err(Error::InvalidParameter("wall_height must be > 0.0"));
        }
        check_friction_angle(self.friction_angle)?;
        if !self.dry_unit_weight.is_finite() || self.dry_unit_weight < 0.0 {
            return Err(Error::InvalidParameter("dry_unit_weight must be ≥ 0.0"));
        }
        if !self.saturated_unit_weight.is_finite() || self.saturated_unit_weight < self.dry_unit_weight {
            return Err(Error::InvalidParameter("saturated_unit_weight must be ≥ dry_unit_weight"));
        }
        if !self.water_table_depth.is_finite()
            || self.water_table_depth < 0.0
            || self.water_table_depth > self.wall_height
        {
            return Err(Error::InvalidParameter("water_table_depth must satisfy 0 ≤ dw ≤ wall_height"));
        }
        if !self.cohesion.is_finite() || self.cohesion < 0.0 {
            return Err(Error::InvalidParameter("cohesion must be ≥ 0.0"));
        }
        if !self.displacement_ratio.is_finite() {
            return Err(Error::InvalidParameter("displacement_ratio must be finite"));
        }
        Ok(())
    }

    /// Returns the submerged unit weight γ′ = γsat - γw
    pub fn submerged_unit_weight(&self, gamma_water: f64) -> f64 {
        self.saturated_unit_weight - gamma_water
    }

    /// Returns the reference depth h/2 where the stresses are evaluated
    #[inline]
    pub fn reference_depth(&self) -> f64 {
        self.wall_height / 2.0
    }

    /// Reads a JSON file containing the soil data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| Error::Io("cannot open file"))?;
        let buffered = BufReader::new(input);
        let soil: SoilState = serde_json::from_reader(buffered).map_err(|_| Error::Io("cannot parse JSON file"))?;
        soil.validate()?;
        Ok(soil)
    }

    /// Writes a JSON file with the soil data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| Error::Io("cannot create directory"))?;
        }
        let mut file = File::create(&path).map_err(|_| Error::Io("cannot create file"))?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| Error::Io("cannot write file"))?;
        Ok(())
    }
}

/// Checks that the friction angle (degrees) lies in the open interval (0, 90)
pub(crate) fn check_friction_angle(friction_angle: f64) -> Result<(), Error> {
    if !friction_angle.is_finite() || friction_angle <= 0.0 || friction_angle >= 90.0 {
        return Err(Error::InvalidParameter("friction_angle must satisfy 0 < φ′ < 90"));
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
