pub mod errors;
pub mod markup;

pub use errors::EmitError;
pub use markup::{emit_basket, format_coord, render_nurbs, write_nurbs};
