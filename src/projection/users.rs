use super::{Projection, date, yes_no};
use quire_types::{ReportKind, User};

pub const USERS: Projection<User> = Projection {
    kind: ReportKind::Users,
    title: "System Users Report",
    headers: &["ID", "Name", "Email", "Role", "Enabled", "Created At"],
    row: user_row,
};

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.id.to_string(),
        user.name.clone(),
        user.email.clone(),
        user.role.to_string(),
        yes_no(user.enabled),
        date(user.created_at),
    ]
}
