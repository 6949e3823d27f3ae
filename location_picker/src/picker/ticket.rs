use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number taken by a resolution when it starts. Updates carrying an
/// older ticket than the last applied one are dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Default)]
pub(crate) struct TicketDispenser(AtomicU64);

impl TicketDispenser {
    pub fn next(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Latest ticket applied to one piece of state.
#[derive(Debug, Default)]
pub(crate) struct Watermark(Ticket);

impl Watermark {
    pub fn advance(&mut self, ticket: Ticket) -> bool {
        if ticket < self.0 {
            return false;
        }
        self.0 = ticket;
        true
    }
}
