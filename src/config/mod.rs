/*!
Configuration of a context.

All configuration for a context is contained within the [Config] structure, given when the context is created.

```rust
# use dpll_sat::config::Config;
let mut config = Config::default();
assert!(config.seed.set(7));
assert_eq!(config.seed.value, 7);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The seed given to the source of rng.
    pub seed: ConfigOption<u64>,

    /// Reseed the source of rng from `seed` at the start of each solve.
    ///
    /// If false, the source of rng continues from its state, e.g. when supplied with
    /// [from_config_and_rng](crate::context::GenericContext::from_config_and_rng).
    pub reseed: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context is configured to provide deterministic results.
    fn default() -> Self {
        Config {
            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            reseed: ConfigOption {
                name: "reseed",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
