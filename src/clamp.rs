use super::*;
use num_traits::ToPrimitive;

/// What a single bound change means for the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClampDecision {
    /// The new constraint is unusable; nothing happens, not even a
    /// notification.
    Skipped,
    /// The value already satisfies the constraint.
    Kept,
    Replaced { from: String, to: String },
}

impl ClampDecision {
    /// Every usable constraint change notifies, clamped or not, since the
    /// host may already have rewritten the value on its own.
    pub fn should_notify(&self) -> bool {
        !matches!(self, Self::Skipped)
    }

    pub fn replacement(&self) -> Option<&str> {
        match self {
            Self::Replaced { to, .. } => Some(to.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeEdge {
    Lower,
    Upper,
}

/// Decision for a new `min`, given the control's current `max`.
pub fn clamp_to_min(
    value: &str,
    raw_min: Option<&str>,
    raw_max: Option<&str>,
    category: Category,
) -> ClampDecision {
    clamp_to_edge(value, raw_min, raw_max, category, RangeEdge::Lower)
}

/// Decision for a new `max`, given the control's current `min`.
pub fn clamp_to_max(
    value: &str,
    raw_min: Option<&str>,
    raw_max: Option<&str>,
    category: Category,
) -> ClampDecision {
    clamp_to_edge(value, raw_min, raw_max, category, RangeEdge::Upper)
}

fn clamp_to_edge(
    value: &str,
    raw_min: Option<&str>,
    raw_max: Option<&str>,
    category: Category,
    edge: RangeEdge,
) -> ClampDecision {
    if !category.uses_range() {
        return ClampDecision::Skipped;
    }

    let parsed_value = parse_value(Some(value), category);
    let min = parse_value(raw_min, category);
    let max = parse_value(raw_max, category);
    let changed = match edge {
        RangeEdge::Lower => &min,
        RangeEdge::Upper => &max,
    };

    if !is_usable(changed, &min, &max, category) {
        return ClampDecision::Skipped;
    }

    let violated = match edge {
        RangeEdge::Lower => parsed_value.is_less_than(changed),
        RangeEdge::Upper => parsed_value.is_greater_than(changed),
    };
    if !violated {
        return ClampDecision::Kept;
    }

    match changed.to_input_value() {
        Some(to) => ClampDecision::Replaced {
            from: value.to_string(),
            to,
        },
        None => ClampDecision::Kept,
    }
}

/// Decision for a new `maxlength` on an `Other` control. Lengths count
/// characters, not bytes.
pub fn clamp_to_max_length(value: &str, raw_maxlength: Option<&str>) -> ClampDecision {
    let Some(limit) = parse_maxlength(raw_maxlength) else {
        return ClampDecision::Skipped;
    };

    // Infinity and anything past usize can never be exceeded.
    let Some(limit) = limit.floor().to_usize() else {
        return ClampDecision::Kept;
    };

    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => ClampDecision::Replaced {
            from: value.to_string(),
            to: value[..byte_idx].to_string(),
        },
        None => ClampDecision::Kept,
    }
}

impl<C: Control> AutoAdjust<C> {
    /// Reacts to a new `min`. Reads the current value and `max` from the
    /// control.
    pub fn on_min_changed(&mut self, raw_min: Option<&str>) -> ClampDecision {
        let value = self.control.value();
        let raw_max = self.control.attr(ConstraintAttr::Max.name());
        let decision = clamp_to_min(&value, raw_min, raw_max.as_deref(), self.category);
        self.apply_decision(ConstraintAttr::Min, raw_min, decision)
    }

    /// Reacts to a new `max`. Reads the current value and `min` from the
    /// control.
    pub fn on_max_changed(&mut self, raw_max: Option<&str>) -> ClampDecision {
        let value = self.control.value();
        let raw_min = self.control.attr(ConstraintAttr::Min.name());
        let decision = clamp_to_max(&value, raw_min.as_deref(), raw_max, self.category);
        self.apply_decision(ConstraintAttr::Max, raw_max, decision)
    }

    pub fn on_maxlength_changed(&mut self, raw_maxlength: Option<&str>) -> ClampDecision {
        let value = self.control.value();
        let decision = clamp_to_max_length(&value, raw_maxlength);
        self.apply_decision(ConstraintAttr::MaxLength, raw_maxlength, decision)
    }

    pub(crate) fn handle_change(
        &mut self,
        attr: ConstraintAttr,
        raw: Option<&str>,
    ) -> ClampDecision {
        match attr {
            ConstraintAttr::Min => self.on_min_changed(raw),
            ConstraintAttr::Max => self.on_max_changed(raw),
            ConstraintAttr::MaxLength => self.on_maxlength_changed(raw),
        }
    }

    fn apply_decision(
        &mut self,
        attr: ConstraintAttr,
        raw: Option<&str>,
        decision: ClampDecision,
    ) -> ClampDecision {
        let raw_desc = raw.unwrap_or("<absent>");
        match &decision {
            ClampDecision::Skipped => {
                self.trace_clamp_line(format!(
                    "[clamp] skip {}={raw_desc} category={}",
                    attr.name(),
                    self.category
                ));
            }
            ClampDecision::Kept => {
                self.trace_clamp_line(format!(
                    "[clamp] keep {}={raw_desc} category={}",
                    attr.name(),
                    self.category
                ));
            }
            ClampDecision::Replaced { from, to } => {
                self.control.set_value(to);
                self.trace_clamp_line(format!(
                    "[clamp] replace {}={raw_desc} category={} from={from:?} to={to:?}",
                    attr.name(),
                    self.category
                ));
            }
        }
        if decision.should_notify() {
            self.schedule_notification(Some(attr));
        }
        decision
    }
}
