//! # Mock authentication
//!
//! No credential is checked. Sign-in derives the display name from the part
//! of the email before `@`; sign-up uses the supplied name. Each path stamps
//! a fixed set of profile stats:
//!
//! | Path | id | joinDate | trustScore | itemsSold | storiesShared |
//! |------|----|----------|------------|-----------|---------------|
//! | sign-in | 1 | January 2024 | 4.8 | 12 | 18 |
//! | sign-up | 2 | September 2024 | 5.0 | 0 | 0 |

use store::User;

use super::{AuthError, AuthProvider};

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg";

/// Accepts any non-empty credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockAuth;

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, AuthError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(value)
}

impl AuthProvider for MockAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = required(email, "Email")?;
        required(password, "Password")?;

        let name = email.split('@').next().unwrap_or(email);
        Ok(User {
            id: 1,
            name: name.to_string(),
            email: email.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            join_date: "January 2024".to_string(),
            trust_score: 4.8,
            items_sold: 12,
            stories_shared: 18,
        })
    }

    fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let name = required(name, "Name")?;
        let email = required(email, "Email")?;
        required(password, "Password")?;

        Ok(User {
            id: 2,
            name: name.to_string(),
            email: email.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            join_date: "September 2024".to_string(),
            trust_score: 5.0,
            items_sold: 0,
            stories_shared: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_derives_name_from_email() {
        let user = MockAuth.sign_in("emma@example.com", "x").unwrap();
        assert_eq!(user.name, "emma");
        assert_eq!(user.email, "emma@example.com");
        assert_eq!(user.join_date, "January 2024");
        assert_eq!(user.items_sold, 12);
        assert_eq!(user.stories_shared, 18);
    }

    #[test]
    fn test_sign_in_without_at_uses_whole_email() {
        let user = MockAuth.sign_in("emma", "x").unwrap();
        assert_eq!(user.name, "emma");
    }

    #[test]
    fn test_sign_up_uses_supplied_name() {
        let user = MockAuth.sign_up("Margaret Foster", "mf@example.com", "pw").unwrap();
        assert_eq!(user.name, "Margaret Foster");
        assert_eq!(user.id, 2);
        assert_eq!(user.trust_score, 5.0);
        assert_eq!(user.items_sold, 0);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(MockAuth.sign_in("  ", "x"), Err(AuthError::MissingField("Email")));
        assert_eq!(MockAuth.sign_in("a@b.c", ""), Err(AuthError::MissingField("Password")));
        assert_eq!(
            MockAuth.sign_up("", "a@b.c", "x"),
            Err(AuthError::MissingField("Name"))
        );
        assert_eq!(AuthError::MissingField("Email").to_string(), "Email is required");
    }
}
