//! Display color tags shared between the server seed data and clients.
//!
//! A quote's `color` field is a free-form string on the wire; the server stores whatever
//! it receives. `Palette` enumerates the gradient tags the seed quotes use so that
//! clients can offer (or randomly pick) one of the known values.

use clap::ValueEnum;
use rand::seq::IteratorRandom;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Known gradient tags for quote cards.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, ValueEnum, Display, EnumString, EnumIter, Hash, Eq, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Palette {
    #[strum(serialize = "from-purple-500 to-pink-500")]
    PurplePink,
    #[strum(serialize = "from-blue-500 to-cyan-400")]
    BlueCyan,
    #[strum(serialize = "from-green-400 to-teal-500")]
    GreenTeal,
    #[strum(serialize = "from-yellow-400 to-orange-500")]
    YellowOrange,
    #[strum(serialize = "from-red-500 to-pink-500")]
    RedPink,
    #[strum(serialize = "from-indigo-500 to-purple-500")]
    IndigoPurple,
}

impl Palette {
    /// Pick a palette entry uniformly at random.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Palette::iter()
            .choose(&mut rng)
            .unwrap_or(Palette::PurplePink)
    }

    /// Resolve a wire tag back to a palette entry, if it is one of the known ones.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }
}
