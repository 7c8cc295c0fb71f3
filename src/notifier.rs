use super::*;

/// Delivered to listeners once per usable constraint change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub event_type: String,
    /// The control's value when the event is delivered, not when it was
    /// queued.
    pub value: String,
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduledNotification {
    pub(crate) sequence: u64,
    pub(crate) source: Option<ConstraintAttr>,
}

#[derive(Debug, Default)]
pub(crate) struct SchedulerState {
    pub(crate) queue: VecDeque<ScheduledNotification>,
    pub(crate) next_sequence: u64,
    pub(crate) delivered: u64,
}

type Listener = Box<dyn FnMut(&ChangeEvent)>;

#[derive(Default)]
pub(crate) struct ListenerStore {
    listeners: Vec<Listener>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn dispatch(&mut self, event: &ChangeEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerStore")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<C: Control> AutoAdjust<C> {
    /// Registers a listener for change events. Listeners run in registration
    /// order during [`flush`](Self::flush).
    pub fn add_listener(&mut self, listener: impl FnMut(&ChangeEvent) + 'static) {
        self.listeners.add(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Queues one change signal for the next turn. Never delivers inline and
    /// never merges with signals already queued.
    pub fn notify(&mut self) {
        self.schedule_notification(None);
    }

    pub(crate) fn schedule_notification(&mut self, source: Option<ConstraintAttr>) {
        let sequence = self.scheduler.next_sequence;
        self.scheduler.next_sequence += 1;
        self.scheduler
            .queue
            .push_back(ScheduledNotification { sequence, source });
        self.trace_notify_line(format!(
            "[notify] queue seq={sequence} source={} pending={}",
            source_label(source),
            self.scheduler.queue.len()
        ));
    }

    pub fn pending_notifications(&self) -> usize {
        self.scheduler.queue.len()
    }

    pub fn delivered_notifications(&self) -> u64 {
        self.scheduler.delivered
    }

    /// Delivers every queued change signal in the order it was queued and
    /// returns how many were delivered.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0usize;
        while let Some(task) = self.scheduler.queue.pop_front() {
            let event = ChangeEvent {
                event_type: self.change_event_name.clone(),
                value: self.control.value(),
                sequence: task.sequence,
            };
            self.trace_notify_line(format!(
                "[notify] deliver seq={} source={} event={} listeners={}",
                task.sequence,
                source_label(task.source),
                event.event_type,
                self.listeners.len()
            ));
            self.listeners.dispatch(&event);
            self.scheduler.delivered += 1;
            delivered += 1;
        }
        delivered
    }
}

fn source_label(source: Option<ConstraintAttr>) -> &'static str {
    source.map(ConstraintAttr::name).unwrap_or("host")
}
