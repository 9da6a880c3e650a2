#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod brush;
pub mod color;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod stroke;

pub use app::PainterApp;
pub use brush::{BrushSize, BrushState, Palette, PaletteColor};
pub use engine::{DrawItem, StrokeEngine};
pub use error::{EngineError, EngineResult};
pub use history::StrokeHistory;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use stroke::{MutableStroke, Stroke};
