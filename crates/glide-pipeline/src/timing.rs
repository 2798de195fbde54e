//! Grouped delay planning for variable-driven reveals.

use glide_core::ViewContext;

use crate::reveal::{order_cmp, RevealWhen};

/// One member of a delay group.
#[derive(Debug, Clone)]
pub struct GroupMember {
    /// Identifier the stage uses to locate the element.
    pub id: String,
    /// The member's own extra delay, in seconds.
    pub own_delay: f32,
    /// Explicit position within the group.
    pub order: Option<f32>,
    /// Which view kinds this member applies to.
    pub when: RevealWhen,
}

impl GroupMember {
    /// Create a member with no delay, order, or gate.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            own_delay: 0.0,
            order: None,
            when: RevealWhen::Both,
        }
    }

    /// Set the member's own delay.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.own_delay = delay;
        self
    }

    /// Set the member's explicit order.
    pub fn with_order(mut self, order: f32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the member's view gate.
    pub fn with_when(mut self, when: RevealWhen) -> Self {
        self.when = when;
        self
    }
}

/// A group wrapper distributing delays across its members.
#[derive(Debug, Clone)]
pub struct DelayGroup {
    /// Delay before the group's first member, in seconds.
    pub base_delay: f32,
    /// Interval between successive members, in seconds.
    pub stagger: f32,
    /// Gate for the whole group.
    pub when: RevealWhen,
    /// Members in document order.
    pub members: Vec<GroupMember>,
}

impl DelayGroup {
    /// Create an empty group.
    pub fn new(base_delay: f32, stagger: f32) -> Self {
        Self {
            base_delay,
            stagger,
            when: RevealWhen::Both,
            members: Vec::new(),
        }
    }

    /// Set the group gate.
    pub fn with_when(mut self, when: RevealWhen) -> Self {
        self.when = when;
        self
    }

    /// Add a member.
    pub fn with_member(mut self, member: GroupMember) -> Self {
        self.members.push(member);
        self
    }
}

/// Computed start delay for one group member.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedDelay {
    /// Member identifier.
    pub id: String,
    /// Total start delay, in seconds.
    pub delay: f32,
}

/// Distribute a group's delays for one view.
///
/// A group gated away from this view kind yields nothing. Kept members are
/// sorted explicit-order-first, then each gets
/// `base_delay + index * stagger + own_delay`.
pub fn plan_group_delays(group: &DelayGroup, ctx: &ViewContext) -> Vec<ComputedDelay> {
    if !group.when.applies(ctx) {
        return Vec::new();
    }

    let mut kept: Vec<&GroupMember> = group
        .members
        .iter()
        .filter(|m| m.when.applies(ctx))
        .collect();
    kept.sort_by(|a, b| order_cmp(a.order, b.order));

    kept.iter()
        .enumerate()
        .map(|(index, m)| ComputedDelay {
            id: m.id.clone(),
            delay: group.base_delay + index as f32 * group.stagger + m.own_delay,
        })
        .collect()
}
