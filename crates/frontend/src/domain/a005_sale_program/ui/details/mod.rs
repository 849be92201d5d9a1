use crate::domain::a005_sale_program::api;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::file_input::FileInput;
use crate::shared::form_utils::{optional_text, parse_amount, required_text};
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use chrono::NaiveDate;
use contracts::domain::a005_sale_program::{SaleProgram, SaleProgramDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

/// Values typed into the program form, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramForm {
    pub name: String,
    pub description: String,
    pub discount: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl ProgramForm {
    pub fn from_program(program: &SaleProgram) -> Self {
        Self {
            name: program.name.clone(),
            description: program.description.clone().unwrap_or_default(),
            discount: program.discount_percent.to_string(),
            start_date: Some(program.start_date),
            end_date: Some(program.end_date),
            is_active: program.is_active,
        }
    }

    pub fn validate(&self) -> Result<SaleProgramDto, String> {
        let name = required_text(&self.name, "Name")?;
        let discount_percent = parse_amount(&self.discount, "Discount")?;
        if discount_percent > 100.0 {
            return Err("Discount cannot exceed 100%".to_string());
        }
        let start_date = self.start_date.ok_or("Start date is required")?;
        let end_date = self.end_date.ok_or("End date is required")?;
        if end_date < start_date {
            return Err("End date must not be before the start date".to_string());
        }
        Ok(SaleProgramDto {
            name,
            description: optional_text(&self.description),
            discount_percent,
            start_date,
            end_date,
            is_active: self.is_active,
        })
    }
}

#[component]
pub fn SaleProgramDetails(
    /// Program being edited; `None` creates a new one
    program: Option<SaleProgram>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let id = program.as_ref().map(|p| p.id);
    let initial = program
        .as_ref()
        .map(ProgramForm::from_program)
        .unwrap_or_else(|| ProgramForm {
            is_active: true,
            ..Default::default()
        });

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let discount = RwSignal::new(initial.discount);
    let start_date = RwSignal::new(initial.start_date);
    let end_date = RwSignal::new(initial.end_date);
    let is_active = RwSignal::new(initial.is_active);
    let banner = StoredValue::<Option<File>, LocalStorage>::new_local(None);
    let banner_url = program.as_ref().and_then(|p| p.banner_url.clone());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = ProgramForm {
            name: name.get_untracked(),
            description: description.get_untracked(),
            discount: discount.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        let dto = match form.validate() {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let file = banner.get_value();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_program(id, &dto, file).await,
                None => api::create_program(&dto, file).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Sale program \"{}\" saved", dto.name));
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
                <Label>"Name"</Label>
                <Input value=name placeholder="Program name" />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description attr:rows=3 />
            </div>

            <div class="form__group">
                <Label>"Discount, %"</Label>
                <Input value=discount placeholder="0-100" />
            </div>

            <div class="form__row">
                <DateInput label="Starts" value=start_date />
                <DateInput label="Ends" value=end_date />
            </div>

            <Checkbox checked=is_active label="Active" />

            <FileInput label="Banner" file=banner current_url=banner_url accept="image/*" />

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

    fn date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    fn form() -> ProgramForm {
        ProgramForm {
            name: " Black Friday ".into(),
            description: String::new(),
            discount: "25,5".into(),
            start_date: date("2024-11-29"),
            end_date: date("2024-11-29"),
            is_active: true,
        }
    }

    #[test]
    fn test_validate_builds_dto() {
        let dto = form().validate().unwrap();
        assert_eq!(dto.name, "Black Friday");
        assert_eq!(dto.discount_percent, 25.5);
        assert_eq!(dto.description, None);
        assert_eq!(dto.start_date, dto.end_date);
    }

    #[test]
    fn test_validate_discount_range() {
        let over = ProgramForm { discount: "100.5".into(), ..form() };
        assert!(over.validate().is_err());
        let negative = ProgramForm { discount: "-1".into(), ..form() };
        assert!(negative.validate().is_err());
        let full = ProgramForm { discount: "100".into(), ..form() };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_validate_dates() {
        let reversed = ProgramForm { end_date: date("2024-11-28"), ..form() };
        assert!(reversed.validate().is_err());
        let missing = ProgramForm { start_date: None, ..form() };
        assert_eq!(missing.validate().unwrap_err(), "Start date is required");
    }
}
