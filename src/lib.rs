pub mod variables;

mod utils;
pub use utils::{RgbaExt, rgb_a, rgba_to_css};

mod assets;
pub use assets::*;
