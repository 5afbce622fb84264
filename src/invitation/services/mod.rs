//! Application services for the invitation lifecycle.

mod ledger;

pub use ledger::{InvitationLedger, InvitationLedgerError, InvitationLedgerResult};
