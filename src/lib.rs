#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod curve;
pub mod editor;
pub mod element;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod renderer;
pub mod sampler;
pub mod scene;
pub mod spline;
pub mod style;
pub mod transform;

pub use app::TextBrushApp;
pub use command::{Command, CommandHistory};
pub use curve::Curve;
pub use editor::Editor;
pub use element::DrawnText;
pub use input::{GestureEvent, PointerEvent};
pub use renderer::Renderer;
pub use sampler::StrokeSampler;
pub use scene::Scene;
pub use spline::{ControlPair, fit_control_points};
pub use style::TextStyle;
pub use transform::TransformController;
