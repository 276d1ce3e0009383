//! Bookkeeping for in-flight catalog mutations.
//!
//! Every mutation moves `Idle → Pending → {Committed | Failed}`. The log
//! tracks which mutations are pending and the outcome of the most recently
//! settled one. It never touches the snapshot itself.

use std::collections::BTreeMap;

use catalog_core::ProductId;
use serde::Serialize;

/// The three write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Lifecycle phase of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPhase {
    Idle,
    Pending,
    Committed,
    Failed,
}

/// A mutation that has been issued and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingMutation {
    /// Ticket handed out when the mutation was issued.
    pub ticket: u64,
    pub kind: MutationKind,
    /// Target product, absent for creates.
    pub product_id: Option<ProductId>,
}

#[derive(Debug, Default)]
pub(crate) struct MutationLog {
    next_ticket: u64,
    in_flight: BTreeMap<u64, PendingMutation>,
    last_settled: Option<MutationPhase>,
}

impl MutationLog {
    /// Register a new pending mutation and return its ticket.
    pub(crate) fn begin(&mut self, kind: MutationKind, product_id: Option<ProductId>) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(
            ticket,
            PendingMutation {
                ticket,
                kind,
                product_id,
            },
        );
        ticket
    }

    /// Mark a pending mutation as answered. `outcome` must be
    /// `Committed` or `Failed`.
    pub(crate) fn settle(&mut self, ticket: u64, outcome: MutationPhase) {
        debug_assert!(matches!(
            outcome,
            MutationPhase::Committed | MutationPhase::Failed
        ));
        self.in_flight.remove(&ticket);
        self.last_settled = Some(outcome);
    }

    /// `Pending` while anything is in flight, otherwise the last outcome.
    pub(crate) fn phase(&self) -> MutationPhase {
        if !self.in_flight.is_empty() {
            return MutationPhase::Pending;
        }
        self.last_settled.unwrap_or(MutationPhase::Idle)
    }

    /// In-flight mutations in issue order.
    pub(crate) fn pending(&self) -> Vec<PendingMutation> {
        self.in_flight.values().cloned().collect()
    }
}
