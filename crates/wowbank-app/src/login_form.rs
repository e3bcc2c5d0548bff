//! Login modal form state.

/// Focusable login form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Text buffers and focus for the login modal.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both fields and refocus the username input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            LoginField::Username => {
                self.username.pop();
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_targets_focused_field() {
        let mut form = LoginForm::new();
        form.push_char('d');
        form.focus_next();
        form.push_char('p');
        assert_eq!(form.username, "d");
        assert_eq!(form.password, "p");
    }

    #[test]
    fn test_backspace_and_reset() {
        let mut form = LoginForm::new();
        form.push_char('a');
        form.push_char('b');
        form.pop_char();
        assert_eq!(form.username, "a");

        form.reset();
        assert_eq!(form.username, "");
        assert_eq!(form.password, "");
        assert_eq!(form.focus, LoginField::Username);
    }
}
