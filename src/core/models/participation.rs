/// An (activity, email) pair, the argument of both signup and removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    pub activity: String,
    pub email: String,
}

impl Participation {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }

    /// Builds a removal target from the data attributes of a clicked control.
    /// Both must be present and non-empty.
    pub fn from_marker(activity: Option<String>, email: Option<String>) -> Option<Self> {
        match (activity, email) {
            (Some(activity), Some(email)) if !activity.is_empty() && !email.is_empty() => {
                Some(Self { activity, email })
            }
            _ => None,
        }
    }
}

/// Signup form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub activity: String,
    pub email: String,
}

impl FormState {
    pub fn participation(&self) -> Participation {
        Participation::new(self.activity.clone(), self.email.clone())
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_requires_both_attributes() {
        assert_eq!(
            Participation::from_marker(Some("Chess Club".into()), Some("a@b.com".into())),
            Some(Participation::new("Chess Club", "a@b.com"))
        );
        assert_eq!(Participation::from_marker(None, Some("a@b.com".into())), None);
        assert_eq!(Participation::from_marker(Some("Chess Club".into()), None), None);
        assert_eq!(Participation::from_marker(Some(String::new()), Some("a@b.com".into())), None);
        assert_eq!(Participation::from_marker(Some("Chess Club".into()), Some(String::new())), None);
    }

    #[test]
    fn form_reset_clears_both_fields() {
        let mut form = FormState {
            activity: "Chess Club".into(),
            email: "a@b.com".into(),
        };
        assert_eq!(form.participation(), Participation::new("Chess Club", "a@b.com"));
        form.reset();
        assert_eq!(form, FormState::default());
    }
}
