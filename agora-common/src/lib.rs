pub mod model;
pub mod sequence;
pub mod util;
