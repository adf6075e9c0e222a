//! Identifiers for fleet entities

use std::fmt;

use super::constants::FIRST_SHIP_ID;

/// Identity of a ship. Ships compare and order by this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(u64);

impl ShipId {
    pub fn new(value: u64) -> Self {
        ShipId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a base within its fleet (registration order).
/// Two bases with the same name and position are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseId(usize);

impl BaseId {
    pub(crate) fn new(index: usize) -> Self {
        BaseId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BaseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of ship ids. Values are never reused.
#[derive(Debug, Clone)]
pub struct ShipIdGenerator {
    next: u64,
}

impl Default for ShipIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(FIRST_SHIP_ID)
    }

    pub fn starting_at(first: u64) -> Self {
        ShipIdGenerator { next: first }
    }

    /// Hand out the current value and advance.
    pub fn next_id(&mut self) -> ShipId {
        let id = ShipId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> ShipId {
        ShipId(self.next)
    }
}
