//! # Form validation
//!
//! Every editable entity has a form struct holding raw field text. Calling
//! `validate` either yields the typed [`Mutation`] to send (create when the form
//! has no id, update when it has one) or the first [`ValidationError`] to show
//! inline. Nothing reaches the network until validation passes.

use store::Role;
use thiserror::Error;

use crate::crud::Mutation;
use crate::models::{EmailPayload, LoginRequest, NotificationEmail, User, UserPayload};

/// Minimum password length accepted when creating a user.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Le nom est obligatoire.")]
    NameRequired,
    #[error("Veuillez saisir un email valide.")]
    InvalidEmail,
    #[error("Le mot de passe doit contenir au moins 6 caractères.")]
    PasswordTooShort,
    #[error("Veuillez saisir votre email et votre mot de passe.")]
    CredentialsRequired,
}

/// Loose email shape check: somewhere in `value`, `non-space@non-space.non-space`.
pub fn is_valid_email(value: &str) -> bool {
    value.match_indices('@').any(|(at, _)| {
        let before_ok = value[..at].chars().last().is_some_and(|c| !c.is_whitespace());
        // The run of non-space characters right after the `@` must hold a dot
        // that is neither its first nor its last character.
        let rest = &value[at + 1..];
        let run = rest.split(char::is_whitespace).next().unwrap_or("");
        let dot_ok = run
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < run.len());
        before_ok && dot_ok
    })
}

/// Raw state of the users page form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub id: Option<u64>,
    pub nom: String,
    pub email: String,
    pub mot_de_passe: String,
    pub role: Role,
}

impl UserForm {
    /// Load an existing user for editing. The password stays empty.
    /// Prefill from an existing account. A role the select cannot show falls
    /// back to the default.
    pub fn edit(user: &User) -> Self {
        let role = match user.role {
            Role::Unknown => Role::default(),
            known => known,
        };
        Self {
            id: Some(user.id),
            nom: user.nom.clone(),
            email: user.email.clone(),
            mot_de_passe: String::new(),
            role,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<Mutation<UserPayload>, ValidationError> {
        if self.nom.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let mut payload = UserPayload {
            nom: self.nom.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            mot_de_passe: None,
        };
        match self.id {
            Some(id) => Ok(Mutation::Update(id, payload)),
            None => {
                if self.mot_de_passe.trim().chars().count() < MIN_PASSWORD_LEN {
                    return Err(ValidationError::PasswordTooShort);
                }
                payload.mot_de_passe = Some(self.mot_de_passe.clone());
                Ok(Mutation::Create(payload))
            }
        }
    }
}

/// Raw state of the notification emails form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmailForm {
    pub id: Option<u64>,
    pub name: String,
    pub adresse: String,
}

impl EmailForm {
    pub fn edit(email: &NotificationEmail) -> Self {
        Self {
            id: Some(email.id),
            name: email.name.clone(),
            adresse: email.adresse.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<Mutation<EmailPayload>, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !is_valid_email(&self.adresse) {
            return Err(ValidationError::InvalidEmail);
        }
        let payload = EmailPayload {
            name: self.name.trim().to_string(),
            adresse: self.adresse.trim().to_string(),
        };
        Ok(match self.id {
            Some(id) => Mutation::Update(id, payload),
            None => Mutation::Create(payload),
        })
    }
}

/// Raw state of the login form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields must be filled; the email is sent trimmed, the password as typed.
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::CredentialsRequired);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@lab.co.ma"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@ .com"));
        assert!(!is_valid_email("a@b. "));
    }

    #[test]
    fn test_new_user_requires_password() {
        let form = UserForm {
            nom: "Ana".into(),
            email: "ana@lab.ma".into(),
            mot_de_passe: "12345".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));

        let form = UserForm {
            mot_de_passe: "123456".into(),
            ..form
        };
        match form.validate() {
            Ok(Mutation::Create(payload)) => {
                assert_eq!(payload.mot_de_passe.as_deref(), Some("123456"));
                assert_eq!(payload.role, Role::Utilisateur);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_user_skips_password_and_updates() {
        let user = User {
            id: 4,
            nom: "  Karim ".into(),
            email: "karim@lab.ma".into(),
            role: Role::Admin,
        };
        let form = UserForm::edit(&user);
        assert!(form.is_editing());
        match form.validate() {
            Ok(Mutation::Update(4, payload)) => {
                assert_eq!(payload.nom, "Karim");
                assert!(payload.mot_de_passe.is_none());
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_user_with_unknown_role_saves_as_utilisateur() {
        let user = User {
            id: 9,
            nom: "Sara".into(),
            email: "sara@lab.ma".into(),
            role: Role::Unknown,
        };
        let form = UserForm::edit(&user);
        assert_eq!(form.role, Role::Utilisateur);
        match form.validate() {
            Ok(Mutation::Update(9, payload)) => assert_eq!(payload.role, Role::Utilisateur),
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: " admin@lab.ma ".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::CredentialsRequired));

        let form = LoginForm {
            password: "secret".into(),
            ..form
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "admin@lab.ma");
        assert_eq!(request.password, "secret");
    }

    #[test]
    fn test_validation_order() {
        let form = UserForm::default();
        assert_eq!(form.validate(), Err(ValidationError::NameRequired));

        let form = EmailForm {
            name: "Qualité".into(),
            adresse: "qualite".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_email_form_trims() {
        let form = EmailForm {
            id: None,
            name: " Qualité ".into(),
            adresse: " qa@lab.ma ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok(Mutation::Create(EmailPayload {
                name: "Qualité".into(),
                adresse: "qa@lab.ma".into(),
            }))
        );
    }
}
