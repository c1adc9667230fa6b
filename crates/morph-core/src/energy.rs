//! Catalog of the energy terms understood by the engine.
//!
//! Every term the objective function can be assembled from has one stable
//! canonical name, used wherever configuration text names *which* term to
//! instantiate. Historical spellings remain accepted through a fixed alias
//! table so that old configurations keep resolving after a rename.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::UnknownEnergyName;

/// Identifier for an energy term of the registration objective.
///
/// Valid kinds are declared in five groups; the declaration order is the
/// canonical catalog order exposed through [`EnergyKind::ALL`] and decides
/// name resolution on a (defective) duplicate canonical name. `Unknown`
/// is a sentinel, never a valid configuration target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyKind {
    /// Sentinel for an unresolved or unconfigured term.
    Unknown,

    // Image similarity measures
    /// Joint entropy of the image pair.
    JointEntropy,
    /// Plain cross-correlation.
    CrossCorrelation,
    /// Mutual information.
    MutualInformation,
    /// Normalized mutual information.
    NormalizedMutualInformation,
    /// Sum of squared intensity differences.
    SumOfSquaredDifferences,
    /// Correlation ratio of the first image given the second.
    CorrelationRatioXY,
    /// Correlation ratio of the second image given the first.
    CorrelationRatioYX,
    /// Label consistency of segmentation images.
    LabelConsistency,
    /// Kappa statistic overlap measure.
    KappaStatistic,
    /// Maximum likelihood measure.
    MaximumLikelihood,
    /// Cosine of the normalized gradient fields.
    NormalizedGradientCosine,
    /// Local (windowed) normalized cross-correlation.
    LocalCrossCorrelation,

    // Point set distances
    /// Registration error over corresponding fiducial points.
    FiducialRegistrationError,
    /// Distance over estimated point correspondences.
    CorrespondenceDistance,
    /// Distance between currents representations of two shapes.
    CurrentsDistance,
    /// Distance between varifold representations of two shapes.
    VarifoldDistance,

    // External point set forces
    /// Balloon inflation/deflation force.
    BalloonForce,
    /// Force attracting points towards image edges.
    ImageEdgeForce,
    /// Force driven by an implicit surface distance image.
    ImplicitSurfaceDistance,
    /// Spring force constrained by an implicit surface.
    ImplicitSurfaceSpringForce,

    // Internal point set forces
    /// Penalizes distortion of the surface metric.
    MetricDistortion,
    /// Pulls edges towards their rest length.
    Stretching,
    /// Penalizes curvature of the point set surface.
    Curvature,
    /// Quadratic fit of neighbor distance to the tangent plane.
    QuadraticCurvature,
    /// Repels non-neighboring triangles that come too close.
    NonSelfIntersection,
    /// Repels non-neighboring nodes that come too close.
    RepulsiveForce,
    /// Drives the surface outwards to inflate it.
    InflationForce,
    /// Uniform spring force between neighboring nodes.
    SpringForce,

    // Transformation constraints
    /// Penalizes local volume change.
    VolumePreservation,
    /// Penalizes folding of the deformation.
    TopologyPreservation,
    /// Default sparsity constraint on the parameters.
    Sparsity,
    /// Thin-plate spline bending energy.
    BendingEnergy,
    /// Sparsity constraint based on the l0-norm.
    L0Norm,
    /// Sparsity constraint based on the l1-norm.
    L1Norm,
    /// Sparsity constraint based on the l2-norm.
    L2Norm,
    /// Squared logarithm of the Jacobian determinant.
    SquaredLogDetJacobian,
    /// Penalizes small minimum Jacobian determinants.
    MinDetJacobian,
}

const SIMILARITY_RANGE: Range<usize> = 0..12;
const POINT_SET_RANGE: Range<usize> = 12..16;
const EXTERNAL_RANGE: Range<usize> = 16..20;
const INTERNAL_RANGE: Range<usize> = 20..28;
const CONSTRAINT_RANGE: Range<usize> = 28..37;

/// Historical and alternative spellings, checked before canonical names.
/// Resolution takes the first exact match in table order.
const ALIASES: &[(&str, EnergyKind)] = &[
    ("NCC", EnergyKind::LocalCrossCorrelation),
    ("LCC", EnergyKind::LocalCrossCorrelation),
    ("Fiducial Registration Error", EnergyKind::FiducialRegistrationError),
    ("Fiducial registration error", EnergyKind::FiducialRegistrationError),
    ("Fiducial Error", EnergyKind::FiducialRegistrationError),
    ("Fiducial error", EnergyKind::FiducialRegistrationError),
    ("Landmark Registration Error", EnergyKind::FiducialRegistrationError),
    ("Landmark registration error", EnergyKind::FiducialRegistrationError),
    ("Landmark Error", EnergyKind::FiducialRegistrationError),
    ("Landmark error", EnergyKind::FiducialRegistrationError),
    ("Point Correspondence Distance", EnergyKind::CorrespondenceDistance),
    ("Point correspondence distance", EnergyKind::CorrespondenceDistance),
    ("Correspondence Distance", EnergyKind::CorrespondenceDistance),
    ("Correspondence distance", EnergyKind::CorrespondenceDistance),
    ("Currents distance", EnergyKind::CurrentsDistance),
    ("Currents Distance", EnergyKind::CurrentsDistance),
    ("Varifold distance", EnergyKind::VarifoldDistance),
    ("Varifold Distance", EnergyKind::VarifoldDistance),
    ("EdgeForce", EnergyKind::ImageEdgeForce),
    ("EdgeLength", EnergyKind::Stretching),
    ("MetricDistortion", EnergyKind::MetricDistortion),
    ("Bending", EnergyKind::Curvature),
    ("SurfaceBending", EnergyKind::Curvature),
    ("SurfaceCurvature", EnergyKind::Curvature),
    ("RepulsiveForce", EnergyKind::RepulsiveForce),
    ("NonSelfIntersection", EnergyKind::NonSelfIntersection),
    ("InflationForce", EnergyKind::InflationForce),
    ("SurfaceInflation", EnergyKind::InflationForce),
    ("JAC", EnergyKind::SquaredLogDetJacobian),
    ("MinJac", EnergyKind::MinDetJacobian),
];

impl EnergyKind {
    /// Every valid kind in catalog (declaration) order.
    pub const ALL: [EnergyKind; 37] = [
        // Image similarity measures
        EnergyKind::JointEntropy,
        EnergyKind::CrossCorrelation,
        EnergyKind::MutualInformation,
        EnergyKind::NormalizedMutualInformation,
        EnergyKind::SumOfSquaredDifferences,
        EnergyKind::CorrelationRatioXY,
        EnergyKind::CorrelationRatioYX,
        EnergyKind::LabelConsistency,
        EnergyKind::KappaStatistic,
        EnergyKind::MaximumLikelihood,
        EnergyKind::NormalizedGradientCosine,
        EnergyKind::LocalCrossCorrelation,
        // Point set distances
        EnergyKind::FiducialRegistrationError,
        EnergyKind::CorrespondenceDistance,
        EnergyKind::CurrentsDistance,
        EnergyKind::VarifoldDistance,
        // External point set forces
        EnergyKind::BalloonForce,
        EnergyKind::ImageEdgeForce,
        EnergyKind::ImplicitSurfaceDistance,
        EnergyKind::ImplicitSurfaceSpringForce,
        // Internal point set forces
        EnergyKind::MetricDistortion,
        EnergyKind::Stretching,
        EnergyKind::Curvature,
        EnergyKind::QuadraticCurvature,
        EnergyKind::NonSelfIntersection,
        EnergyKind::RepulsiveForce,
        EnergyKind::InflationForce,
        EnergyKind::SpringForce,
        // Transformation constraints
        EnergyKind::VolumePreservation,
        EnergyKind::TopologyPreservation,
        EnergyKind::Sparsity,
        EnergyKind::BendingEnergy,
        EnergyKind::L0Norm,
        EnergyKind::L1Norm,
        EnergyKind::L2Norm,
        EnergyKind::SquaredLogDetJacobian,
        EnergyKind::MinDetJacobian,
    ];

    /// Returns the canonical display name of this kind.
    ///
    /// Total over the enum: `Unknown` yields the literal `"Unknown"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyKind::Unknown => "Unknown",
            EnergyKind::JointEntropy => "JE",
            EnergyKind::CrossCorrelation => "CC",
            EnergyKind::MutualInformation => "MI",
            EnergyKind::NormalizedMutualInformation => "NMI",
            EnergyKind::SumOfSquaredDifferences => "SSD",
            EnergyKind::CorrelationRatioXY => "CR_XY",
            EnergyKind::CorrelationRatioYX => "CR_YX",
            EnergyKind::LabelConsistency => "LC",
            EnergyKind::KappaStatistic => "K",
            EnergyKind::MaximumLikelihood => "ML",
            EnergyKind::NormalizedGradientCosine => "NGF_COS",
            EnergyKind::LocalCrossCorrelation => "LNCC",
            EnergyKind::FiducialRegistrationError => "FRE",
            EnergyKind::CorrespondenceDistance => "PCD",
            EnergyKind::CurrentsDistance => "CurrentsDistance",
            EnergyKind::VarifoldDistance => "VarifoldDistance",
            EnergyKind::BalloonForce => "BalloonForce",
            EnergyKind::ImageEdgeForce => "ImageEdgeForce",
            EnergyKind::ImplicitSurfaceDistance => "ImplicitSurfaceDistance",
            EnergyKind::ImplicitSurfaceSpringForce => "ImplicitSurfaceSpringForce",
            EnergyKind::MetricDistortion => "MetricDistortion",
            EnergyKind::Stretching => "Stretching",
            EnergyKind::Curvature => "Curvature",
            EnergyKind::QuadraticCurvature => "QuadraticCurvature",
            EnergyKind::NonSelfIntersection => "NSI",
            EnergyKind::RepulsiveForce => "Repulsion",
            EnergyKind::InflationForce => "Inflation",
            EnergyKind::SpringForce => "Spring",
            EnergyKind::VolumePreservation => "VP",
            EnergyKind::TopologyPreservation => "TP",
            EnergyKind::Sparsity => "Sparsity",
            EnergyKind::BendingEnergy => "BE",
            EnergyKind::L0Norm => "L0",
            EnergyKind::L1Norm => "L1",
            EnergyKind::L2Norm => "L2",
            EnergyKind::SquaredLogDetJacobian => "SqLogDetJac",
            EnergyKind::MinDetJacobian => "MinDetJac",
        }
    }

    /// Resolves a term name to its kind.
    ///
    /// Aliases are checked first, then canonical names from the last
    /// declared kind down to the first; on a duplicate canonical name the
    /// later declared kind therefore resolves. `None` means the name is
    /// not in the catalog, which callers may or may not treat as fatal.
    pub fn from_name(name: &str) -> Option<EnergyKind> {
        for (alias, kind) in ALIASES {
            if *alias == name {
                return Some(*kind);
            }
        }
        EnergyKind::ALL
            .iter()
            .rev()
            .copied()
            .find(|kind| kind.as_str() == name)
    }

    /// Returns the accepted alias spellings and the kinds they resolve to.
    pub fn aliases() -> &'static [(&'static str, EnergyKind)] {
        ALIASES
    }

    /// Returns the group this kind belongs to, or `None` for `Unknown`.
    pub fn group(self) -> Option<EnergyGroup> {
        let index = EnergyKind::ALL.iter().position(|&kind| kind == self)?;
        EnergyGroup::ALL
            .iter()
            .copied()
            .find(|group| group.index_range().contains(&index))
    }
}

impl fmt::Display for EnergyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyKind {
    type Err = UnknownEnergyName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyKind::from_name(s).ok_or_else(|| UnknownEnergyName {
            name: s.to_string(),
        })
    }
}

impl Serialize for EnergyKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EnergyKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == "Unknown" {
            return Ok(EnergyKind::Unknown);
        }
        EnergyKind::from_name(&name).ok_or_else(|| D::Error::custom(UnknownEnergyName { name }))
    }
}

/// Families the valid energy kinds are partitioned into.
///
/// Each group covers one contiguous run of [`EnergyKind::ALL`], in the
/// order the groups are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyGroup {
    /// Image (dis-)similarity measures.
    Similarity,
    /// Distances between point sets.
    PointSetDistance,
    /// External point set forces.
    ExternalForce,
    /// Internal point set forces.
    InternalForce,
    /// Transformation regularization terms.
    Constraint,
}

impl EnergyGroup {
    /// Every group in catalog order.
    pub const ALL: &'static [EnergyGroup] = &[
        EnergyGroup::Similarity,
        EnergyGroup::PointSetDistance,
        EnergyGroup::ExternalForce,
        EnergyGroup::InternalForce,
        EnergyGroup::Constraint,
    ];

    /// Returns a short lower-case label for the group.
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyGroup::Similarity => "image similarity",
            EnergyGroup::PointSetDistance => "point set distance",
            EnergyGroup::ExternalForce => "external force",
            EnergyGroup::InternalForce => "internal force",
            EnergyGroup::Constraint => "transformation constraint",
        }
    }

    /// Returns the kinds belonging to this group, in catalog order.
    pub fn kinds(self) -> &'static [EnergyKind] {
        &EnergyKind::ALL[self.index_range()]
    }

    fn index_range(self) -> Range<usize> {
        match self {
            EnergyGroup::Similarity => SIMILARITY_RANGE,
            EnergyGroup::PointSetDistance => POINT_SET_RANGE,
            EnergyGroup::ExternalForce => EXTERNAL_RANGE,
            EnergyGroup::InternalForce => INTERNAL_RANGE,
            EnergyGroup::Constraint => CONSTRAINT_RANGE,
        }
    }
}

impl fmt::Display for EnergyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
