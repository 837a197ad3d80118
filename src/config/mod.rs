/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each option is a [ConfigOption] so that requests to change an option may be checked against its bounds.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::structures::assignment::ATOM_LIMIT_MAX;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum count of distinct atoms in a formula for which a search for a witness will take place.
    ///
    /// As the search is over all 2^n assignments to n atoms, lowering the limit bounds the time a search may take.
    pub atom_limit: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_limit: ConfigOption {
                name: "atom_limit",
                min: 0,
                max: ATOM_LIMIT_MAX,
                value: ATOM_LIMIT_MAX,
            },
        }
    }
}
