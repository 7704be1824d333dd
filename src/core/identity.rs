//! Display name resolution for roster members and message creators.

use crate::core::models::Sender;
use crate::parsing::{Member, MemberKind};

/// Placeholder name for accounts removed before the export.
pub const DELETED_USER: &str = "DeletedUser";

/// Placeholder contact identifier for creators without an email.
pub const UNKNOWN_EMAIL: &str = "unknown@deleted";

/// Returns the part of an email address before `@`.
///
/// ```
/// use chatscroll::core::identity::local_part;
///
/// assert_eq!(local_part("team@example.com"), "team");
/// assert_eq!(local_part("no-at-sign"), "no-at-sign");
/// ```
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Display name of a roster member or creator, if one can be derived.
///
/// Group members are named after their email's local part.
fn display_name(member: &Member) -> Option<&str> {
    let group_name = if member.kind() == MemberKind::Group {
        member
            .email
            .as_deref()
            .map(local_part)
            .filter(|name| !name.is_empty())
    } else {
        None
    };

    group_name.or_else(|| member.name.as_deref().filter(|name| !name.is_empty()))
}

/// Resolves the roster into display names, in roster order.
///
/// A roster that resolves to exactly one name (usually a direct message whose
/// counterpart deleted their account) gets [`DELETED_USER`] appended.
///
/// # Example
///
/// ```
/// use chatscroll::core::identity::roster_names;
/// use chatscroll::parsing::Member;
///
/// let names = roster_names(&[Member::group("team@example.com")]);
/// assert_eq!(names, vec!["team", "DeletedUser"]);
/// ```
pub fn roster_names(members: &[Member]) -> Vec<String> {
    let mut names: Vec<String> = members
        .iter()
        .map(|member| display_name(member).unwrap_or(DELETED_USER).to_string())
        .collect();

    if names.len() == 1 {
        names.push(DELETED_USER.to_string());
    }

    names
}

/// Resolves a message creator into a [`Sender`].
pub fn resolve_sender(creator: &Member) -> Sender {
    let name = display_name(creator).unwrap_or(DELETED_USER);
    let email = creator
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .unwrap_or(UNKNOWN_EMAIL);
    Sender::new(name, email)
}
