use super::*;

const LOG_TARGET: &str = "auto_adjust";

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) watches: bool,
    pub(crate) clamps: bool,
    pub(crate) notifications: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            watches: true,
            clamps: true,
            notifications: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}

impl<C: Control> AutoAdjust<C> {
    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.to_stderr = enabled;
    }

    pub fn set_trace_watches(&mut self, enabled: bool) {
        self.trace_state.watches = enabled;
    }

    pub fn set_trace_clamps(&mut self, enabled: bool) {
        self.trace_state.clamps = enabled;
    }

    pub fn set_trace_notifications(&mut self, enabled: bool) {
        self.trace_state.notifications = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidConfig(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    pub(crate) fn trace_watch_line(&mut self, line: String) {
        log::trace!(target: LOG_TARGET, "{line}");
        if self.trace_state.enabled && self.trace_state.watches {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_clamp_line(&mut self, line: String) {
        log::debug!(target: LOG_TARGET, "{line}");
        if self.trace_state.enabled && self.trace_state.clamps {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_notify_line(&mut self, line: String) {
        log::trace!(target: LOG_TARGET, "{line}");
        if self.trace_state.enabled && self.trace_state.notifications {
            self.trace_line(line);
        }
    }

    fn trace_line(&mut self, line: String) {
        if self.trace_state.to_stderr {
            eprintln!("{line}");
        }
        if self.trace_state.logs.len() >= self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        self.trace_state.logs.push_back(line);
    }
}
