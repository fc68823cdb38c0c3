use std::{ops::Deref, sync::LazyLock};

use crate::variables::{Dataset, VariableIndex};

macro_rules! generate_builtin_datasets {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockDataset = LazyLockDataset::new(|| {
                Dataset::from_string(include_str!($path))
                    .expect(concat!("bundled dataset ", $path, " must parse"))
            });
        )+
    };
}

generate_builtin_datasets!(["../../tokens/default.json", DEFAULT_DATASET]);

/// A bundled dataset, parsed on first access and immutable afterwards.
pub struct LazyLockDataset(LazyLock<Dataset>);

impl LazyLockDataset {
    #[inline(always)]
    const fn new(f: fn() -> Dataset) -> Self {
        Self(LazyLock::new(f))
    }

    pub fn index(&self) -> VariableIndex {
        VariableIndex::build(self)
    }
}

impl Deref for LazyLockDataset {
    type Target = Dataset;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The dataset bundled with this crate.
pub fn builtin_dataset() -> &'static Dataset {
    &DEFAULT_DATASET
}
