use super::*;
use std::cell::RefCell;
use std::rc::Rc;

mod binding_digest_and_notify;

fn attach(control: InputControl) -> Result<AutoAdjust<InputControl>> {
    AutoAdjust::attach(control, AdjustConfig::default())
}

fn record_events(adjust: &mut AutoAdjust<InputControl>) -> Rc<RefCell<Vec<ChangeEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    adjust.add_listener(move |event| sink.borrow_mut().push(event.clone()));
    events
}
