/// Minimum caller privilege a command requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Everyone,
    /// Bot owner. Callers carry it as the `master` role.
    Master,
}

impl Permission {
    pub fn role_name(&self) -> &'static str {
        match self {
            Permission::Everyone => "everyone",
            Permission::Master => "master",
        }
    }

    /// Whether a caller holding `user_roles` may run a command gated by `self`.
    pub fn is_satisfied_by(&self, user_roles: &[String]) -> bool {
        match self {
            Permission::Everyone => true,
            Permission::Master => user_roles
                .iter()
                .any(|r| r.eq_ignore_ascii_case(self.role_name())),
        }
    }
}

/// The built-in commands this plugin registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `#MC状态` and its synonyms.
    QueryStatus,
    /// `#Dynmap设置网址 <url>`.
    SetUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_requires_role() {
        assert!(Permission::Everyone.is_satisfied_by(&[]));
        assert!(!Permission::Master.is_satisfied_by(&["moderator".to_string()]));
        assert!(Permission::Master.is_satisfied_by(&["Master".to_string()]));
    }
}
