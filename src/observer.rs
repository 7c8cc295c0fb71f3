use super::*;

/// A constraint attribute a binding can watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintAttr {
    Min,
    Max,
    MaxLength,
}

impl ConstraintAttr {
    pub fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::MaxLength => "maxlength",
        }
    }

    /// Range controls watch `min` then `max`; everything else only watches
    /// `maxlength`.
    pub fn watched_for(category: Category) -> &'static [ConstraintAttr] {
        if category.uses_range() {
            &[Self::Min, Self::Max]
        } else {
            &[Self::MaxLength]
        }
    }
}

#[derive(Debug, Clone)]
struct Watch {
    attr: ConstraintAttr,
    // Outer `None` until the first pass has looked at the attribute.
    last: Option<Option<String>>,
}

/// Remembers the last value seen for each watched attribute and reports which
/// ones differ on the next look.
#[derive(Debug, Clone)]
pub(crate) struct AttributeObserver {
    watches: Vec<Watch>,
}

impl AttributeObserver {
    pub(crate) fn for_category(category: Category) -> Self {
        let watches = ConstraintAttr::watched_for(category)
            .iter()
            .map(|attr| Watch {
                attr: *attr,
                last: None,
            })
            .collect();
        Self { watches }
    }

    pub(crate) fn watched(&self) -> Vec<ConstraintAttr> {
        self.watches.iter().map(|watch| watch.attr).collect()
    }

    /// Every watch fires on its first pass, even for an absent attribute.
    pub(crate) fn collect_changes(
        &mut self,
        control: &impl Control,
    ) -> Vec<(ConstraintAttr, Option<String>)> {
        let mut changes = Vec::new();
        for watch in &mut self.watches {
            let current = control.attr(watch.attr.name());
            let dirty = match &watch.last {
                Some(last) => *last != current,
                None => true,
            };
            if dirty {
                watch.last = Some(current.clone());
                changes.push((watch.attr, current));
            }
        }
        changes
    }
}

impl<C: Control> AutoAdjust<C> {
    /// Runs watch passes until one sees no attribute change, calling the
    /// matching handler for every change. Notifications stay queued for
    /// [`flush`](Self::flush). Returns how many handlers ran.
    pub fn digest(&mut self) -> Result<usize> {
        let mut handled = 0usize;
        let mut passes = 0usize;
        loop {
            let changes = self.observer.collect_changes(&self.control);
            if changes.is_empty() {
                return Ok(handled);
            }
            passes += 1;
            if passes > self.digest_limit {
                let last_dirty = changes
                    .iter()
                    .map(|(attr, _)| attr.name())
                    .collect::<Vec<_>>()
                    .join(",");
                self.trace_watch_line(format!(
                    "[watch] limit exceeded limit={} dirty={last_dirty}",
                    self.digest_limit
                ));
                return Err(Error::DigestLimit {
                    limit: self.digest_limit,
                    last_dirty,
                });
            }

            for (attr, raw) in changes {
                self.trace_watch_line(format!(
                    "[watch] pass={passes} {} -> {}",
                    attr.name(),
                    raw.as_deref().unwrap_or("<absent>")
                ));
                self.handle_change(attr, raw.as_deref());
                handled += 1;
            }
        }
    }

    /// One full turn: settle the watches, then deliver what they queued.
    pub fn tick(&mut self) -> Result<usize> {
        self.digest()?;
        Ok(self.flush())
    }

    pub fn watched_attributes(&self) -> Vec<ConstraintAttr> {
        self.observer.watched()
    }
}
