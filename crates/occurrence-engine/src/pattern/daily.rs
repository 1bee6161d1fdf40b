//! Every N days at the anchor's wall-clock time.

use chrono::Days;

use super::{Expander, Instants, LocalAnchor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Daily {
    interval: u32,
}

impl Daily {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
        }
    }
}

impl Expander for Daily {
    // No iteration cap: every step moves forward by at least one day, so the
    // end bound or the limit always terminates the stream. Running off the end
    // of the representable calendar ends it too.
    fn instants<'a>(&'a self, anchor: &'a LocalAnchor) -> Instants<'a> {
        let step = u64::from(self.interval);
        Box::new(
            (0u64..)
                .map_while(move |n| {
                    let days = n.checked_mul(step)?;
                    anchor.date.checked_add_days(Days::new(days))
                })
                .filter_map(move |date| anchor.on(date)),
        )
    }
}
