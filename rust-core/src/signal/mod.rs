//! Three-phase signal synthesis and Clarke decomposition

pub mod params;
pub mod clarke;
pub mod synth;
pub mod table;

pub use params::{Channel, Harmonic, HarmonicSpec, SynthesisParams, TransformMode};
pub use clarke::{clarke, space_vector};
pub use synth::{sample, sample_at, Sample};
pub use table::{build_table, SignalTable, TableConfig, TrajectoryKind, TrajectoryPoint};
