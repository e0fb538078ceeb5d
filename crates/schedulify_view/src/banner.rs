// --- File: crates/schedulify_view/src/banner.rs ---

/// Severity of a status banner.
///
/// `Warning` is used for conflicts and persists until a subsequent action
/// replaces it; every other severity auto-clears after the configured
/// interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn auto_clears(self) -> bool {
        !matches!(self, Severity::Warning)
    }
}

/// A transient status message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub severity: Severity,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Banner {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Banner {
            text: text.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Banner {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Banner {
            text: text.into(),
            severity: Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_persist_until_replaced() {
        assert!(!Severity::Warning.auto_clears());
    }

    #[test]
    fn other_severities_auto_clear() {
        for severity in [Severity::Success, Severity::Error, Severity::Info] {
            assert!(severity.auto_clears(), "{severity:?} should auto-clear");
        }
    }

    #[test]
    fn constructors_set_the_matching_severity() {
        assert_eq!(Banner::success("ok").severity, Severity::Success);
        assert_eq!(Banner::warning("conflict").severity, Severity::Warning);
        assert_eq!(Banner::error("boom").severity, Severity::Error);
        assert_eq!(Banner::info("fyi").severity, Severity::Info);
    }
}
