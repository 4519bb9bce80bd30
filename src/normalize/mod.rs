//! Display-field resolution.
//!
//! Report exports have renamed fields over time. Each display field is
//! resolved through a [`FallbackChain`]: an ordered table of source
//! accessors, current name first, legacy aliases after, plus a literal
//! default. The first non-empty source wins; sources are never merged.
//!
//! All chains live in [`fields`].

pub mod fields;

/// Reads one candidate source for a display field.
pub type Accessor<R> = for<'a> fn(&'a R) -> Option<&'a str>;

/// Ordered alias table for one display field of record type `R`.
pub struct FallbackChain<R: 'static> {
    /// Field name, for logging.
    pub field: &'static str,
    /// Candidate sources in priority order.
    pub sources: &'static [Accessor<R>],
    /// Used when every source is absent or empty.
    pub default: &'static str,
}

impl<R: 'static> FallbackChain<R> {
    /// Resolve the field for `record`.
    pub fn resolve<'a>(&self, record: &'a R) -> &'a str {
        match self.lookup(record) {
            Some((0, value)) => value,
            Some((source, value)) => {
                tracing::trace!(field = self.field, source, "Resolved from legacy alias");
                value
            }
            None => {
                tracing::trace!(field = self.field, "No source present, using default");
                self.default
            }
        }
    }

    /// The first non-empty source, without applying the default.
    pub fn first_present<'a>(&self, record: &'a R) -> Option<&'a str> {
        self.lookup(record).map(|(_, value)| value)
    }

    /// The first non-empty source and its position in the table.
    fn lookup<'a>(&self, record: &'a R) -> Option<(usize, &'a str)> {
        self.sources.iter().enumerate().find_map(|(index, source)| {
            source(record)
                .filter(|value| !value.is_empty())
                .map(|value| (index, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        current: Option<String>,
        legacy: Option<String>,
    }

    const CHAIN: FallbackChain<Sample> = FallbackChain {
        field: "sample",
        sources: &[|s| s.current.as_deref(), |s| s.legacy.as_deref()],
        default: "n/a",
    };

    fn sample(current: Option<&str>, legacy: Option<&str>) -> Sample {
        Sample {
            current: current.map(str::to_string),
            legacy: legacy.map(str::to_string),
        }
    }

    #[test]
    fn test_first_source_wins() {
        let record = sample(Some("new"), Some("old"));
        assert_eq!(CHAIN.resolve(&record), "new");
        assert_eq!(CHAIN.lookup(&record), Some((0, "new")));
    }

    #[test]
    fn test_falls_through_to_alias() {
        let record = sample(None, Some("old"));
        assert_eq!(CHAIN.resolve(&record), "old");
        assert_eq!(CHAIN.lookup(&record), Some((1, "old")));
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let record = sample(Some(""), Some("old"));
        assert_eq!(CHAIN.resolve(&record), "old");
    }

    #[test]
    fn test_default_when_nothing_present() {
        let record = sample(None, Some(""));
        assert_eq!(CHAIN.resolve(&record), "n/a");
        assert_eq!(CHAIN.first_present(&record), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let record = sample(Some("a"), Some("b"));
        assert_eq!(CHAIN.resolve(&record), CHAIN.resolve(&record));
    }
}
