/// A user created during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUser {
    /// Id assigned by the remote service
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// Users created by the users phase, in creation order.
///
/// Built once and handed to the tasks phase read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRoster {
    users: Vec<GeneratedUser>,
}

impl UserRoster {
    pub fn new(users: Vec<GeneratedUser>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GeneratedUser> {
        self.users.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedUser> {
        self.users.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.users.iter().map(|user| user.id.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids().any(|known| known == id)
    }
}

impl FromIterator<GeneratedUser> for UserRoster {
    fn from_iter<I: IntoIterator<Item = GeneratedUser>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
