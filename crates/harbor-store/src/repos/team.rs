//! Team collection: add, replace-by-id, status transitions.

use harbor_core::entities::TeamMember;
use harbor_core::enums::{MemberStatus, Role};

use crate::change::{ChangeKind, Collection};
use crate::error::StoreError;
use crate::store::{EntityStore, next_id, replace_by_id};

impl EntityStore {
    #[must_use]
    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    #[must_use]
    pub fn team_member(&self, id: u32) -> Option<&TeamMember> {
        self.team_members.iter().find(|member| member.id() == id)
    }

    /// Team members holding `role`.
    pub fn team_with_role(&self, role: Role) -> impl Iterator<Item = &TeamMember> {
        self.team_members
            .iter()
            .filter(move |member| member.role() == role)
    }

    /// Id for a new team member: one past the highest in use.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] when `u32::MAX` is already taken.
    pub fn next_team_member_id(&self) -> Result<u32, StoreError> {
        next_id(&self.team_members, "team member", TeamMember::id)
    }

    pub fn add_team_member(&mut self, member: TeamMember) {
        let id = member.id();
        self.team_members.push(member);
        self.notify(Collection::TeamMembers, ChangeKind::Added, id);
    }

    /// Replace the team member with the same id; `false` when absent.
    pub fn update_team_member(&mut self, member: TeamMember) -> bool {
        let id = member.id();
        let replaced = replace_by_id(&mut self.team_members, member, TeamMember::id);
        if replaced {
            self.notify(Collection::TeamMembers, ChangeKind::Updated, id);
        }
        replaced
    }

    /// Move a team member along the status machine (e.g. approve a lawyer).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id and
    /// [`StoreError::InvalidTransition`] when `next` is not reachable from the
    /// member's current status.
    pub fn transition_member_status(
        &mut self,
        id: u32,
        next: MemberStatus,
    ) -> Result<TeamMember, StoreError> {
        let mut member = self
            .team_member(id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity_type: "team member",
                id,
            })?;

        if !member.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                id,
                from: member.status.to_string(),
                to: next.to_string(),
            });
        }

        member.status = next;
        self.update_team_member(member.clone());
        Ok(member)
    }
}
