//! NullEnvironment — offers no capabilities at all.

use crate::environment::Environment;

/// An environment with every accessor left at its `None` default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEnvironment;

impl Environment for NullEnvironment {}
