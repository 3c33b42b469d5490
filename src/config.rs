//! Arena configuration.

use crate::error::{LayoutError, LayoutResult};

/// Growth parameters of the item arena.
///
/// Capacity starts at zero, jumps to `initial_capacity` on the first item and
/// is multiplied by `growth_factor` whenever it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    pub initial_capacity: usize,
    pub growth_factor: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 32,
            growth_factor: 4,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.initial_capacity == 0 {
            return Err(LayoutError::Config(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(LayoutError::Config(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// Capacity to grow to when `current` is exhausted.
    #[inline]
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            self.initial_capacity
        } else {
            current.saturating_mul(self.growth_factor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_growth() {
        let config = ArenaConfig::default();
        assert_eq!(config.next_capacity(0), 32);
        assert_eq!(config.next_capacity(32), 128);
        assert_eq!(config.next_capacity(128), 512);
    }

    #[test]
    fn test_validate() {
        assert!(ArenaConfig::default().validate().is_ok());

        let config = ArenaConfig {
            initial_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LayoutError::Config(_))));

        let config = ArenaConfig {
            growth_factor: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LayoutError::Config(_))));
    }
}
