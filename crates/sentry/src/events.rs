//! Events raised by sentries for the host to react to.

use sim_core::{Entity, Vec3};

/// A sentry spotted its target this tick. Raised exactly once per
/// acquisition; re-raised only after the target is lost and found again.
#[derive(Debug, Clone, Copy)]
pub struct Alert {
    /// The sentry that raised the alert.
    pub sentry: Entity,
    /// Where the sentry stood when it alerted.
    pub position: Vec3,
}
