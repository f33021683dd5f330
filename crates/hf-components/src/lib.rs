//! hf-components: hydraulic element models for hydroflow.
//!
//! Provides models for the elements that shape a pressure field:
//! - Pipes with Darcy-Weisbach friction and minor losses
//! - Tanks as pressure boundaries (open or gas-blanketed)
//! - A single head-adding pump with NPSH and power diagnostics
//!
//! All models are deterministic functions of their parameters. Formulas are
//! evaluated in `f64` in the order they are written, with no reassociation, so
//! results are reproducible bit-for-bit.
//!
//! # Example
//!
//! ```
//! use hf_components::Pipe;
//! use hf_core::units::{m, m2ps, m3ps};
//!
//! let pipe = Pipe::new("discharge", m(35.0), m(0.08), m(0.000045), 0.0, m3ps(0.01));
//! let h = pipe.hydraulics(m2ps(1.0e-6)).unwrap();
//! assert!(h.head_loss.value > 0.0);
//! ```

pub mod common;
pub mod error;
pub mod pipe;
pub mod pump;
pub mod tank;

pub use error::{ComponentError, ComponentResult};
pub use pipe::{FlowRegime, Pipe, PipeHydraulics, friction_factor};
pub use pump::{Pump, PumpInputs, PumpPerformance, SurfaceReference};
pub use tank::Tank;
