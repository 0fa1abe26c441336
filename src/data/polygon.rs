mod iter;
pub use iter::*;

mod convex;
pub use convex::*;
