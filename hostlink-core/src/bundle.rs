//! The bundle a host passes to `connect`.

use crate::environment::Environment;
use crate::locale::Localization;
use crate::utilities::Utilities;
use std::fmt;
use std::sync::Arc;

/// Everything the host injects in one `connect` call.
///
/// The bundle is moved into `connect`. Nothing the connector does to it
/// is visible to the host afterwards.
#[derive(Clone)]
pub struct Bundle {
    /// Host capabilities. Replaces the previous environment wholesale.
    pub environment: Arc<dyn Environment>,
    /// Host translations. The home locale is merged with the widget's
    /// defaults; other locales are taken verbatim.
    pub localization: Localization,
    /// Host helpers, if any.
    pub utilities: Option<Utilities>,
}

impl Bundle {
    /// Create a bundle with no utilities.
    pub fn new(environment: Arc<dyn Environment>, localization: Localization) -> Self {
        Self {
            environment,
            localization,
            utilities: None,
        }
    }

    /// Attach host utilities.
    pub fn with_utilities(mut self, utilities: Utilities) -> Self {
        self.utilities = Some(utilities);
        self
    }
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("environment", &"<dyn Environment>")
            .field("localization", &self.localization)
            .field("utilities", &self.utilities)
            .finish()
    }
}
