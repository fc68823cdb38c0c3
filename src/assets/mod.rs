mod assets;
pub use assets::*;

mod builtin;
pub use builtin::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod token_assets;
        pub use token_assets::*;
    }
);
