//! Rendering module
//!
//! Pure read-only functions of the simulation state. `draw` produces a
//! backend-agnostic command list; `shapes` tessellates it into a vertex
//! buffer for backends that want one; `viewport` owns display sizing. The
//! engine deliberately does not own a rasterizer.

pub mod draw;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use draw::{DrawCommand, render};
pub use shapes::tessellate;
pub use vertex::Vertex;
pub use viewport::Viewport;
