use crate::user::User;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Age")]
    age: i64,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
        }
    }
}

/// Render users as a rounded table; empty input renders as an empty string.
pub fn users_table(users: &[User]) -> String {
    if users.is_empty() {
        return String::new();
    }

    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_table_lists_every_user() {
        let users = vec![User::new(1, "Charlie", 40), User::new(2, "Dana", 28)];
        let table = users_table(&users);

        assert!(table.contains("Name"));
        assert!(table.contains("Charlie"));
        assert!(table.contains("Dana"));
        assert!(table.contains("28"));
    }

    #[test]
    fn test_users_table_empty() {
        assert!(users_table(&[]).is_empty());
    }
}
