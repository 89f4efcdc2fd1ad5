//! Owning registry for the single live backdrop

use std::rc::Rc;

use aurora_host::Host;

use crate::backdrop::AnimatedBackdrop;
use crate::config::BackdropConfig;

/// Holds at most one live [`AnimatedBackdrop`] per page
///
/// Re-running page setup (hot reload, repeated initialization) goes through
/// [`replace`](BackdropRegistry::replace), which always tears the previous
/// instance down before the next one mounts.
pub struct BackdropRegistry<H: Host> {
    host: Rc<H>,
    config: BackdropConfig,
    current: Option<AnimatedBackdrop<H>>,
}

impl<H: Host> BackdropRegistry<H> {
    pub fn new(host: Rc<H>, config: BackdropConfig) -> Self {
        Self {
            host,
            config: config.validated(),
            current: None,
        }
    }

    /// Destroy the current backdrop (if any) and mount a new one
    pub fn replace(&mut self) -> &AnimatedBackdrop<H> {
        if let Some(previous) = self.current.take() {
            self.host
                .debug_write("[aurora] Replacing existing backdrop");
            previous.destroy();
        }
        self.current
            .insert(AnimatedBackdrop::mount(self.host.clone(), self.config.clone()))
    }

    pub fn current(&self) -> Option<&AnimatedBackdrop<H>> {
        self.current.as_ref()
    }

    /// Destroy and forget the current backdrop
    pub fn clear(&mut self) {
        if let Some(backdrop) = self.current.take() {
            backdrop.destroy();
        }
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Takes effect on the next [`replace`](BackdropRegistry::replace)
    pub fn set_config(&mut self, config: BackdropConfig) {
        self.config = config.validated();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BackdropState;
    use aurora_host_mock::MockHost;

    #[test]
    fn test_replace_keeps_single_surface() {
        let host = Rc::new(MockHost::new());
        let mut registry = BackdropRegistry::new(host.clone(), BackdropConfig::default());
        let first = registry.replace().surface();
        let second = registry.replace().surface();

        assert_ne!(first, second);
        assert_eq!(host.surfaces_with_id("aurora-bg"), 1);
        assert_eq!(host.first_child(), second);
        assert_eq!(host.pending_frames(), 1);
    }

    #[test]
    fn test_clear_destroys_current() {
        let host = Rc::new(MockHost::new());
        let mut registry = BackdropRegistry::new(host.clone(), BackdropConfig::default());
        registry.replace();
        registry.clear();

        assert!(registry.current().is_none());
        assert_eq!(host.surfaces_with_id("aurora-bg"), 0);
        assert_eq!(host.pending_frames(), 0);
        registry.clear();
    }

    #[test]
    fn test_set_config_applies_on_next_replace() {
        let host = Rc::new(MockHost::new());
        let mut registry = BackdropRegistry::new(host.clone(), BackdropConfig::default());
        registry.replace();
        registry.set_config(BackdropConfig {
            element_id: "backdrop".into(),
            ..BackdropConfig::default()
        });
        assert_eq!(host.surfaces_with_id("aurora-bg"), 1);

        let backdrop = registry.replace();
        assert_eq!(backdrop.state(), BackdropState::Active);
        assert_eq!(host.surfaces_with_id("aurora-bg"), 0);
        assert_eq!(host.surfaces_with_id("backdrop"), 1);
    }
}
