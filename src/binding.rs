use super::*;

/// Keeps one control's value inside its constraint attributes.
///
/// The binding owns the control; the host changes attributes through
/// [`control_mut`](Self::control_mut) and drives [`digest`](Self::digest) and
/// [`flush`](Self::flush) (or [`tick`](Self::tick) for both).
#[derive(Debug)]
pub struct AutoAdjust<C: Control> {
    pub(crate) control: C,
    pub(crate) category: Category,
    pub(crate) observer: AttributeObserver,
    pub(crate) scheduler: SchedulerState,
    pub(crate) listeners: ListenerStore,
    pub(crate) change_event_name: String,
    pub(crate) digest_limit: usize,
    pub(crate) trace_state: TraceState,
}

impl<C: Control> AutoAdjust<C> {
    /// Classifies the control and picks the attributes to watch. Nothing is
    /// clamped until the first [`digest`](Self::digest).
    pub fn attach(control: C, config: AdjustConfig) -> Result<Self> {
        let classifier = TypeClassifier::from_config(&config)?;
        Self::attach_with_classifier(control, &classifier, config)
    }

    /// Like [`attach`](Self::attach) with an already compiled classifier, for
    /// hosts binding many controls.
    pub fn attach_with_classifier(
        control: C,
        classifier: &TypeClassifier,
        config: AdjustConfig,
    ) -> Result<Self> {
        config.validate()?;
        let category = classifier.classify(&control.kind());
        Ok(Self {
            control,
            category,
            observer: AttributeObserver::for_category(category),
            scheduler: SchedulerState::default(),
            listeners: ListenerStore::default(),
            change_event_name: config.change_event_name,
            digest_limit: config.digest_limit,
            trace_state: TraceState::default(),
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Detaches and hands the control back. Queued notifications are dropped.
    pub fn into_control(self) -> C {
        self.control
    }

    pub fn change_event_name(&self) -> &str {
        &self.change_event_name
    }

    pub fn set_change_event_name(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "set_change_event_name requires a non-empty name".into(),
            ));
        }
        self.change_event_name = name.to_string();
        Ok(())
    }

    pub fn digest_limit(&self) -> usize {
        self.digest_limit
    }

    pub fn set_digest_limit(&mut self, max_passes: usize) -> Result<()> {
        if max_passes == 0 {
            return Err(Error::InvalidConfig(
                "set_digest_limit requires at least 1 pass".into(),
            ));
        }
        self.digest_limit = max_passes;
        Ok(())
    }
}
