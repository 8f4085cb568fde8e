use std::cell::RefCell;
use std::rc::Rc;

use termform::{CoefficientSequence, CollectorConfig, TermCollector};

/// Collector that has already accepted `degree`
pub fn collector_with_degree(config: CollectorConfig, degree: &str) -> TermCollector {
    let mut collector = TermCollector::new(config);
    collector.set_degree_input(degree);
    collector
        .go()
        .unwrap_or_else(|err| panic!("degree {:?} should be accepted: {}", degree, err));
    collector
}

/// Register a handler that records every submitted sequence
pub fn record_submissions(collector: &mut TermCollector) -> Rc<RefCell<Vec<CoefficientSequence>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    collector.set_on_submit(move |coefficients: &CoefficientSequence| {
        sink.borrow_mut().push(coefficients.clone());
    });
    calls
}

/// Fill fields in render order (highest exponent first)
pub fn fill_in_render_order(collector: &mut TermCollector, entries: &[&str]) {
    let slots = collector.slots().to_vec();
    for (id, text) in slots.into_iter().zip(entries) {
        collector.set_entry(id, *text).expect("field is shown");
    }
}
