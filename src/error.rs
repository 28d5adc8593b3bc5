/// Errors that can occur while configuring a parameter store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Both a raw query string and an object source were supplied
    MutuallyExclusiveSources,
}

impl core::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MutuallyExclusiveSources => {
                "Cannot specify both a query string and an object source (mutually exclusive sources)"
            }
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParamsError {}

/// Result type for parameter store construction
pub type Result<T> = core::result::Result<T, ParamsError>;
