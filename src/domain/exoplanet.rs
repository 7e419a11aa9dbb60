use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Exclusive bounds for the distance from the reference point, in light years.
pub const DISTANCE_BOUNDS: (i64, i64) = (10, 1000);
/// Exclusive bounds for the radius, in Earth-radius units.
pub const RADIUS_BOUNDS: (f64, f64) = (0.1, 10.0);
/// Exclusive bounds for the mass of a terrestrial planet, in Earth-mass units.
pub const MASS_BOUNDS: (f64, f64) = (0.1, 10.0);

/// Surface gravity assumed for every gas giant before scaling by radius.
const GAS_GIANT_GRAVITY_FACTOR: f64 = 0.5;

/// A rule of the catalog that submitted data violates.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("distance must be between 10 and 1000 light years")]
    Distance(i64),
    #[error("radius must be between 0.1 and 10 Earth-radius units")]
    Radius(f64),
    #[error(
        "mass must be provided and between 0.1 and 10 Earth-mass units for terrestrial planets"
    )]
    Mass(Option<f64>),
}

/// Discriminant used on the wire and in patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetType {
    GasGiant,
    Terrestrial,
}

/// Physical classification of a planet.
///
/// Only terrestrial planets carry a mass; gas giants use a fixed gravity factor
/// and have no mass to validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlanetKind {
    GasGiant,
    Terrestrial { mass: f64 },
}

impl PlanetKind {
    pub fn planet_type(&self) -> PlanetType {
        match self {
            PlanetKind::GasGiant => PlanetType::GasGiant,
            PlanetKind::Terrestrial { .. } => PlanetType::Terrestrial,
        }
    }

    pub fn mass(&self) -> Option<f64> {
        match self {
            PlanetKind::GasGiant => None,
            PlanetKind::Terrestrial { mass } => Some(*mass),
        }
    }
}

/// A catalog record.
///
/// Serialized flat, with the planet kind contributing the `type` tag and, for
/// terrestrial planets, the `mass` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exoplanet {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Light years from the reference point.
    pub distance: i64,
    /// Earth-radius units.
    pub radius: f64,
    #[serde(flatten)]
    pub kind: PlanetKind,
}

impl Exoplanet {
    /// Checks the catalog bounds on an already-built record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_bounds(
            self.distance,
            self.radius,
            self.kind.planet_type(),
            self.kind.mass(),
        )
    }

    pub fn gravity(&self) -> f64 {
        let radius_squared = self.radius.powi(2);
        match self.kind {
            PlanetKind::GasGiant => GAS_GIANT_GRAVITY_FACTOR / radius_squared,
            PlanetKind::Terrestrial { mass } => mass / radius_squared,
        }
    }

    /// Fuel units needed to reach the planet with the given crew.
    ///
    /// Zero gravity is not guarded against and yields a non-finite result.
    pub fn fuel_estimate(&self, crew: CrewCapacity) -> f64 {
        self.distance as f64 / self.gravity().powi(2) * crew.get() as f64
    }
}

fn in_open_range<T: PartialOrd>(value: T, (low, high): (T, T)) -> bool {
    value > low && value < high
}

fn check_bounds(
    distance: i64,
    radius: f64,
    planet_type: PlanetType,
    mass: Option<f64>,
) -> Result<(), ValidationError> {
    if !in_open_range(distance, DISTANCE_BOUNDS) {
        return Err(ValidationError::Distance(distance));
    }
    if !in_open_range(radius, RADIUS_BOUNDS) {
        return Err(ValidationError::Radius(radius));
    }
    if planet_type == PlanetType::Terrestrial {
        match mass {
            Some(m) if in_open_range(m, MASS_BOUNDS) => {}
            other => return Err(ValidationError::Mass(other)),
        }
    }
    Ok(())
}

/// Client-submitted planet data that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExoplanetDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub distance: i64,
    #[serde(default)]
    pub radius: f64,
    pub mass: Option<f64>,
    #[serde(rename = "type")]
    pub planet_type: PlanetType,
}

impl ExoplanetDraft {
    /// Returns the first violated rule, checking distance, radius and mass in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_bounds(self.distance, self.radius, self.planet_type, self.mass)
    }

    /// Validates the draft and turns it into a record with the given identifier.
    ///
    /// A mass supplied for a gas giant is dropped.
    pub fn into_exoplanet(self, id: Uuid) -> Result<Exoplanet, ValidationError> {
        self.validate()?;
        let kind = match (self.planet_type, self.mass) {
            (PlanetType::GasGiant, _) => PlanetKind::GasGiant,
            (PlanetType::Terrestrial, Some(mass)) => PlanetKind::Terrestrial { mass },
            (PlanetType::Terrestrial, None) => return Err(ValidationError::Mass(None)),
        };
        Ok(Exoplanet {
            id,
            name: self.name,
            description: self.description,
            distance: self.distance,
            radius: self.radius,
            kind,
        })
    }
}

impl From<Exoplanet> for ExoplanetDraft {
    fn from(planet: Exoplanet) -> Self {
        Self {
            name: planet.name,
            description: planet.description,
            distance: planet.distance,
            radius: planet.radius,
            mass: planet.kind.mass(),
            planet_type: planet.kind.planet_type(),
        }
    }
}

/// A partial update: only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExoplanetPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub distance: Option<i64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    #[serde(rename = "type")]
    pub planet_type: Option<PlanetType>,
}

impl ExoplanetPatch {
    /// Overlays the present fields onto `existing`. The result still needs validating.
    pub fn apply(self, existing: Exoplanet) -> ExoplanetDraft {
        let mut draft = ExoplanetDraft::from(existing);
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(distance) = self.distance {
            draft.distance = distance;
        }
        if let Some(radius) = self.radius {
            draft.radius = radius;
        }
        if let Some(mass) = self.mass {
            draft.mass = Some(mass);
        }
        if let Some(planet_type) = self.planet_type {
            draft.planet_type = planet_type;
        }
        draft
    }
}

/// Number of crew members on a trip. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewCapacity(NonZeroU64);

impl CrewCapacity {
    pub fn new(crew: u64) -> Option<Self> {
        NonZeroU64::new(crew).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl FromStr for CrewCapacity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| CatalogError::MalformedRequest("invalid crew capacity".to_string()))
    }
}
