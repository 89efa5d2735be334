use std::{collections::VecDeque, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::map::TractId;

/// Order in which frontier candidates are evaluated.
///
/// The order decides which tracts end up in which district, so it is part of
/// a run's configuration rather than an accident of the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierOrder {
    /// Most recently pushed candidate first (depth-first flood fill).
    #[default]
    Lifo,
    /// Oldest candidate first (breadth-first flood fill).
    Fifo,
}

impl FromStr for FrontierOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lifo" | "stack" => Ok(Self::Lifo),
            "fifo" | "queue" => Ok(Self::Fifo),
            other => Err(format!("unknown frontier order '{other}' (expected lifo or fifo)")),
        }
    }
}

impl fmt::Display for FrontierOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Self::Lifo => "lifo", Self::Fifo => "fifo" })
    }
}

/// Candidate tract ids awaiting evaluation during growth.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    order: FrontierOrder,
    queue: VecDeque<TractId>,
}

impl Frontier {
    pub(crate) fn new(order: FrontierOrder) -> Self {
        Self { order, queue: VecDeque::new() }
    }

    /// Push candidates in the given order.
    pub(crate) fn extend(&mut self, ids: &[TractId]) {
        self.queue.extend(ids.iter().cloned());
    }

    /// Take the next candidate according to the traversal order.
    pub(crate) fn pop(&mut self) -> Option<TractId> {
        match self.order {
            FrontierOrder::Lifo => self.queue.pop_back(),
            FrontierOrder::Fifo => self.queue.pop_front(),
        }
    }

    #[inline] pub(crate) fn len(&self) -> usize { self.queue.len() }
}
