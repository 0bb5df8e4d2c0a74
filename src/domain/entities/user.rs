//! User entity representing a managed user record.

use chrono::NaiveDate;

/// A stored user record.
///
/// The id is server-assigned by the repository on insert. `address` and
/// `phone_number` are optional; everything else is required at creation
/// time, so a stored user always carries a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        email: String,
        first_name: String,
        last_name: String,
        birth_date: NaiveDate,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            birth_date,
            address,
            phone_number,
        }
    }

    /// Overwrites all mutable fields from `fields`, keeping the id.
    pub fn overwrite(&mut self, fields: NewUser) {
        self.email = fields.email;
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.birth_date = fields.birth_date;
        self.address = fields.address;
        self.phone_number = fields.phone_number;
    }

    /// Applies a partial update. `None` fields are left unchanged.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = Some(phone_number);
        }
    }
}

/// Input data for creating a user; doubles as the full field set for
/// overwriting updates.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1999, 1, 2).unwrap()
    }

    fn sample_user() -> User {
        User::new(
            1,
            "example@mail.com".to_string(),
            "John".to_string(),
            "Tray".to_string(),
            birth_date(),
            Some("Main St. Mankato Mississippi 96522".to_string()),
            Some("212-456-7890".to_string()),
        )
    }

    #[test]
    fn test_user_creation() {
        let user = sample_user();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "example@mail.com");
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Tray");
        assert_eq!(user.birth_date, birth_date());
        assert!(user.address.is_some());
        assert!(user.phone_number.is_some());
    }

    #[test]
    fn test_overwrite_replaces_all_fields() {
        let mut user = sample_user();

        user.overwrite(NewUser {
            email: "new@mail.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 6, 30).unwrap(),
            address: None,
            phone_number: None,
        });

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "new@mail.com");
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Smith");
        assert!(user.address.is_none());
        assert!(user.phone_number.is_none());
    }

    #[test]
    fn test_apply_patch_changes_only_present_fields() {
        let mut user = sample_user();

        user.apply_patch(UserPatch {
            first_name: Some("Jane".to_string()),
            ..UserPatch::default()
        });

        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.last_name, "Tray");
        assert_eq!(user.email, "example@mail.com");
        assert_eq!(user.birth_date, birth_date());
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply_patch(UserPatch::default());

        assert_eq!(user, before);
    }
}
