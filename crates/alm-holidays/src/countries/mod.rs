//! Built-in country holiday tables, organized by region.

pub mod africa;
pub mod america;
pub mod asia_pacific;
pub mod europe;

pub use africa::*;
pub use america::*;
pub use asia_pacific::*;
pub use europe::*;
