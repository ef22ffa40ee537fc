use std::sync::atomic::{AtomicU64, Ordering};

/// A view region whose content is replaced by actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Search,
    Detail,
    Recommendations,
    Featured,
}

impl Channel {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            Channel::Search => 0,
            Channel::Detail => 1,
            Channel::Recommendations => 2,
            Channel::Featured => 3,
        }
    }
}

/// Proof that an action started at a given generation of its channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    channel: Channel,
    generation: u64,
}

impl Ticket {
    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-channel request generations
///
/// Issuing a ticket supersedes every earlier ticket on the same channel. Results
/// carried by a superseded ticket must not be written to the view.
#[derive(Debug, Default)]
pub struct Generations {
    counters: [AtomicU64; Channel::COUNT],
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, channel: Channel) -> Ticket {
        let generation = self.counters[channel.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            channel,
            generation,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counters[ticket.channel.index()].load(Ordering::SeqCst) == ticket.generation
    }
}
