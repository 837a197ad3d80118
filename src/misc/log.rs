/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [well-formedness](crate::procedures::validate)
    pub const SYNTAX: &str = "syntax";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to the [search for a witness](crate::procedures::witness)
    pub const WITNESS: &str = "witness";

    /// Logs related to reading [symbols](crate::structures::symbols) and [interpretations](crate::structures::interpretation)
    pub const SYMBOLS: &str = "symbols";
}
