use super::*;

#[test]
fn attach_classifies_and_selects_watches() -> Result<()> {
    let adjust = attach(InputControl::new("range"))?;
    assert_eq!(adjust.category(), Category::Numeric);
    assert_eq!(
        adjust.watched_attributes(),
        vec![ConstraintAttr::Min, ConstraintAttr::Max]
    );

    let adjust = attach(InputControl::new("month"))?;
    assert_eq!(adjust.category(), Category::Date);

    let adjust = attach(InputControl::new("search"))?;
    assert_eq!(adjust.category(), Category::Other);
    assert_eq!(adjust.watched_attributes(), vec![ConstraintAttr::MaxLength]);

    let adjust = attach(InputControl::default())?;
    assert_eq!(adjust.category(), Category::Other);
    Ok(())
}

#[test]
fn attach_rejects_invalid_config() {
    let config = AdjustConfig::default().with_digest_limit(0);
    assert!(matches!(
        AutoAdjust::attach(InputControl::new("number"), config),
        Err(Error::InvalidConfig(_))
    ));

    let config = AdjustConfig::default().with_change_event_name("  ");
    assert!(matches!(
        AutoAdjust::attach(InputControl::new("number"), config),
        Err(Error::InvalidConfig(_))
    ));

    let config = AdjustConfig::default().with_numeric_type_pattern("(");
    assert!(matches!(
        AutoAdjust::attach(InputControl::new("number"), config),
        Err(Error::InvalidTypePattern { .. })
    ));
}

#[test]
fn first_digest_applies_bounds_present_at_attach() -> Result<()> {
    let control = InputControl::new("number")
        .with_attr("min", "1")
        .with_attr("max", "10")
        .with_value("42");
    let mut adjust = attach(control)?;
    assert_eq!(adjust.digest()?, 2);
    assert_eq!(adjust.control().value(), "10");
    assert_eq!(adjust.pending_notifications(), 2);

    assert_eq!(adjust.digest()?, 0);
    assert_eq!(adjust.pending_notifications(), 2);
    Ok(())
}

#[test]
fn first_digest_without_bounds_queues_nothing() -> Result<()> {
    let mut adjust = attach(InputControl::new("number").with_value("5"))?;
    assert_eq!(adjust.digest()?, 2);
    assert_eq!(adjust.control().value(), "5");
    assert_eq!(adjust.pending_notifications(), 0);

    let mut adjust = attach(InputControl::new("text").with_value("hello"))?;
    assert_eq!(adjust.digest()?, 1);
    assert_eq!(adjust.pending_notifications(), 0);
    Ok(())
}

#[test]
fn digest_only_runs_handlers_for_changed_attributes() -> Result<()> {
    let mut adjust = attach(InputControl::new("number").with_value("5"))?;
    adjust.digest()?;

    adjust.control_mut().set_attr("max", "4");
    assert_eq!(adjust.digest()?, 1);
    assert_eq!(adjust.control().value(), "4");

    adjust.control_mut().set_attr("max", "4");
    assert_eq!(adjust.digest()?, 0);

    adjust.control_mut().remove_attr("max");
    assert_eq!(adjust.digest()?, 1);
    assert_eq!(adjust.control().value(), "4");
    assert_eq!(adjust.pending_notifications(), 1);
    Ok(())
}

#[test]
fn notifications_wait_for_flush() -> Result<()> {
    let mut adjust = attach(InputControl::new("number").with_value("5"))?;
    let events = record_events(&mut adjust);
    adjust.digest()?;

    adjust.control_mut().set_attr("min", "10");
    adjust.digest()?;
    assert!(events.borrow().is_empty());
    assert_eq!(adjust.pending_notifications(), 1);

    assert_eq!(adjust.flush(), 1);
    assert_eq!(adjust.pending_notifications(), 0);
    assert_eq!(adjust.delivered_notifications(), 1);
    assert_eq!(
        events.borrow().as_slice(),
        &[ChangeEvent {
            event_type: "input".into(),
            value: "10".into(),
            sequence: 0,
        }]
    );
    assert_eq!(adjust.flush(), 0);
    Ok(())
}

#[test]
fn each_handler_queues_its_own_notification() -> Result<()> {
    let mut adjust = attach(InputControl::new("number").with_value("5"))?;
    adjust.digest()?;
    let events = record_events(&mut adjust);

    adjust.control_mut().set_attr("min", "1");
    adjust.control_mut().set_attr("max", "3");
    assert_eq!(adjust.tick()?, 2);

    let sequences = events
        .borrow()
        .iter()
        .map(|event| event.sequence)
        .collect::<Vec<_>>();
    assert_eq!(sequences, vec![0, 1]);
    assert!(events.borrow().iter().all(|event| event.value == "3"));
    Ok(())
}

#[test]
fn listeners_run_in_registration_order() -> Result<()> {
    let mut adjust = attach(InputControl::new("text").with_value("abcdef"))?;
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let order = Rc::clone(&order);
        adjust.add_listener(move |_| order.borrow_mut().push(name));
    }
    assert_eq!(adjust.listener_count(), 2);

    adjust.control_mut().set_attr("maxlength", "3");
    adjust.tick()?;
    assert_eq!(adjust.control().value(), "abc");
    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
    Ok(())
}

#[test]
fn host_notify_and_custom_event_name() -> Result<()> {
    let config = AdjustConfig::default().with_change_event_name("change");
    let mut adjust = AutoAdjust::attach(InputControl::new("number"), config)?;
    let events = record_events(&mut adjust);
    adjust.notify();
    assert_eq!(adjust.flush(), 1);
    assert_eq!(events.borrow()[0].event_type, "change");

    adjust.set_change_event_name("input")?;
    assert_eq!(adjust.change_event_name(), "input");
    assert!(adjust.set_change_event_name("").is_err());
    Ok(())
}

#[test]
fn direct_handlers_read_the_other_bound_from_the_control() -> Result<()> {
    let control = InputControl::new("number")
        .with_attr("max", "10")
        .with_value("3");
    let mut adjust = attach(control)?;

    assert_eq!(adjust.on_min_changed(Some("15")), ClampDecision::Skipped);
    assert_eq!(adjust.control().value(), "3");
    assert_eq!(adjust.pending_notifications(), 0);

    assert_eq!(
        adjust.on_min_changed(Some("5")).replacement(),
        Some("5")
    );
    assert_eq!(adjust.on_min_changed(Some("5")), ClampDecision::Kept);
    assert_eq!(adjust.control().value(), "5");
    assert_eq!(adjust.pending_notifications(), 2);
    Ok(())
}

#[test]
fn maxlength_handler_ignored_for_blank_limit() -> Result<()> {
    let mut adjust = attach(InputControl::new("text").with_value("hello"))?;
    assert_eq!(adjust.on_maxlength_changed(Some("")), ClampDecision::Skipped);
    assert_eq!(adjust.control().value(), "hello");
    assert_eq!(adjust.pending_notifications(), 0);
    Ok(())
}

/// Rewrites its own `max` whenever its value is written.
#[derive(Debug, Default)]
struct DriftingControl {
    value: String,
    max: i64,
}

impl Control for DriftingControl {
    fn attr(&self, name: &str) -> Option<String> {
        match name {
            "type" => Some("number".into()),
            "max" => Some(self.max.to_string()),
            _ => None,
        }
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.max -= 1;
    }
}

#[test]
fn digest_stops_at_the_pass_limit() -> Result<()> {
    let control = DriftingControl {
        value: "100".into(),
        max: 50,
    };
    let mut adjust = AutoAdjust::attach(control, AdjustConfig::default().with_digest_limit(3))?;
    match adjust.digest() {
        Err(Error::DigestLimit { limit, last_dirty }) => {
            assert_eq!(limit, 3);
            assert_eq!(last_dirty, "max");
        }
        other => panic!("expected digest limit error, got: {other:?}"),
    }
    assert_eq!(adjust.digest_limit(), 3);
    assert!(adjust.set_digest_limit(0).is_err());
    Ok(())
}

#[test]
fn trace_records_watch_clamp_and_notify_lines() -> Result<()> {
    let mut adjust = attach(InputControl::new("number").with_value("5"))?;
    adjust.enable_trace(true);
    adjust.set_trace_stderr(false);

    adjust.control_mut().set_attr("min", "10");
    adjust.tick()?;
    let logs = adjust.take_trace_logs();
    assert!(logs.iter().any(|line| line.starts_with("[watch] pass=1 min -> 10")));
    assert!(
        logs.iter()
            .any(|line| line.contains("[clamp] replace min=10") && line.contains("to=\"10\""))
    );
    assert!(logs.iter().any(|line| line.starts_with("[notify] queue seq=0 source=min")));
    assert!(logs.iter().any(|line| line.starts_with("[notify] deliver seq=0")));
    assert!(adjust.take_trace_logs().is_empty());
    Ok(())
}

#[test]
fn trace_switches_and_log_limit() -> Result<()> {
    let mut adjust = attach(InputControl::new("text").with_value("hello world"))?;
    adjust.enable_trace(true);
    adjust.set_trace_stderr(false);
    adjust.set_trace_watches(false);
    adjust.set_trace_notifications(false);
    adjust.set_trace_log_limit(1)?;
    assert!(adjust.set_trace_log_limit(0).is_err());

    adjust.control_mut().set_attr("maxlength", "20");
    adjust.tick()?;
    adjust.control_mut().set_attr("maxlength", "5");
    adjust.tick()?;

    let logs = adjust.take_trace_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("[clamp] replace maxlength=5"));

    adjust.set_trace_clamps(false);
    adjust.control_mut().set_attr("maxlength", "2");
    adjust.tick()?;
    assert!(adjust.take_trace_logs().is_empty());
    Ok(())
}

#[test]
fn into_control_hands_back_the_clamped_control() -> Result<()> {
    let mut adjust = attach(InputControl::new("date").with_value("2020-01-01"))?;
    adjust.digest()?;
    adjust.control_mut().set_attr("max", "2019-12-31");
    adjust.digest()?;
    let control = adjust.into_control();
    assert_eq!(control.value(), "2019-12-31");
    assert_eq!(control.attr("max").as_deref(), Some("2019-12-31"));
    Ok(())
}
