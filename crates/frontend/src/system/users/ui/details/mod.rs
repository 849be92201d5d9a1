mod roles;

pub use roles::UserRoles;

use crate::shared::form_utils::{optional_text, required_text};
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::system::users::api;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub password: String,
    pub password_confirm: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            full_name: user.full_name.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn validate_profile(&self) -> Result<UpdateUserDto, String> {
        let phone_number = optional_text(&self.phone_number);
        if let Some(phone) = &phone_number {
            let valid = phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
            if !valid {
                return Err("Phone number may contain only digits, spaces and + - ( )".to_string());
            }
        }
        Ok(UpdateUserDto {
            full_name: optional_text(&self.full_name),
            phone_number,
        })
    }

    pub fn validate_new(&self) -> Result<CreateUserDto, String> {
        let email = required_text(&self.email, "Email")?;
        if !email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                PASSWORD_MIN_LEN
            ));
        }
        if self.password != self.password_confirm {
            return Err("Passwords do not match".to_string());
        }
        let profile = self.validate_profile()?;
        Ok(CreateUserDto {
            email,
            full_name: profile.full_name,
            phone_number: profile.phone_number,
            password: self.password.clone(),
        })
    }
}

enum SaveRequest {
    Create(CreateUserDto),
    Update(String, UpdateUserDto),
}

/// Create form for a new user, or profile form for an existing one.
#[component]
pub fn UserDetails(user: Option<User>, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notices = use_notices();
    let id = user.as_ref().map(|u| u.id.clone());
    let is_new = id.is_none();
    let initial = user.as_ref().map(UserForm::from_user).unwrap_or_default();

    let email = RwSignal::new(initial.email);
    let full_name = RwSignal::new(initial.full_name);
    let phone_number = RwSignal::new(initial.phone_number);
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = UserForm {
            email: email.get_untracked(),
            full_name: full_name.get_untracked(),
            phone_number: phone_number.get_untracked(),
            password: password.get_untracked(),
            password_confirm: password_confirm.get_untracked(),
        };
        let label = form.email.trim().to_string();
        let request = match id.clone() {
            Some(id) => form.validate_profile().map(|dto| SaveRequest::Update(id, dto)),
            None => form.validate_new().map(SaveRequest::Create),
        };
        let request = match request {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match request {
                SaveRequest::Create(dto) => api::create_user(&dto).await,
                SaveRequest::Update(id, dto) => api::update_user(&id, &dto).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("User {} saved", label));
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=email input_type=InputType::Email disabled=!is_new placeholder="user@example.com" />
            </div>

            <div class="form__group">
                <Label>"Full name"</Label>
                <Input value=full_name />
            </div>

            <div class="form__group">
                <Label>"Phone"</Label>
                <Input value=phone_number placeholder="+1 555 0100" />
            </div>

            {is_new.then(|| view! {
                <div class="form__row">
                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input value=password input_type=InputType::Password />
                    </div>
                    <div class="form__group">
                        <Label>"Repeat password"</Label>
                        <Input value=password_confirm input_type=InputType::Password />
                    </div>
                </div>
            })}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> UserForm {
        UserForm {
            email: " jane@shop.test ".into(),
            full_name: "Jane Doe".into(),
            phone_number: String::new(),
            password: "secret1".into(),
            password_confirm: "secret1".into(),
        }
    }

    #[test]
    fn test_validate_new_user() {
        let dto = new_user().validate_new().unwrap();
        assert_eq!(dto.email, "jane@shop.test");
        assert_eq!(dto.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(dto.phone_number, None);
    }

    #[test]
    fn test_validate_new_user_rejects_bad_input() {
        let short = UserForm { password: "abc".into(), password_confirm: "abc".into(), ..new_user() };
        assert!(short.validate_new().is_err());
        let mismatch = UserForm { password_confirm: "secret2".into(), ..new_user() };
        assert_eq!(mismatch.validate_new().unwrap_err(), "Passwords do not match");
        let no_at = UserForm { email: "jane".into(), ..new_user() };
        assert!(no_at.validate_new().is_err());
    }

    #[test]
    fn test_validate_profile_phone() {
        let ok = UserForm { phone_number: "+1 (555) 010-0".into(), ..Default::default() };
        assert_eq!(ok.validate_profile().unwrap().phone_number.as_deref(), Some("+1 (555) 010-0"));
        let bad = UserForm { phone_number: "call me".into(), ..Default::default() };
        assert!(bad.validate_profile().is_err());
    }
}
