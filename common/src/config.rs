pub struct Config {
    /// Forces debug-level diagnostics.
    ///
    /// When unset, `RUST_LOG` decides and defaults to `info`.
    pub verbose: bool,
}
