//! Editor form state.
//!
//! `HomeForm` owns the in-progress draft for one editor visit, plus the
//! focus cursor the terminal UI moves between fields. The draft is only
//! handed to the application reducer on submit; the "delete" gesture resets
//! the draft and never touches saved records.

use crate::model::{HomeDraft, RentType};

/// Literal fallback for a blank name at save time.
const DEFAULT_HOME_NAME: &str = "home";

/// Specifying the editor form fields, in focus order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Name,
    Location,
    RentType,
    Deposit,
    MonthlyRent,
    MaintenanceFee,
    DueDate,
    BrokerPhone,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Location,
        FormField::RentType,
        FormField::Deposit,
        FormField::MonthlyRent,
        FormField::MaintenanceFee,
        FormField::DueDate,
        FormField::BrokerPhone,
    ];

    /// Return the display label for the field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Location => "Location",
            FormField::RentType => "Rent type",
            FormField::Deposit => "Deposit",
            FormField::MonthlyRent => "Monthly rent",
            FormField::MaintenanceFee => "Maintenance fee",
            FormField::DueDate => "Visit date",
            FormField::BrokerPhone => "Broker phone",
        }
    }

    /// Return the next field in focus order, wrapping around.
    ///
    pub fn next(&self) -> FormField {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Return the previous field in focus order, wrapping around.
    ///
    pub fn previous(&self) -> FormField {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Borrow the draft's backing string for a text field. The rent-type field
/// has no backing string; it is toggled, not typed.
fn field_mut(draft: &mut HomeDraft, field: FormField) -> Option<&mut String> {
    match field {
        FormField::Name => Some(&mut draft.name),
        FormField::Location => Some(&mut draft.location),
        FormField::Deposit => Some(&mut draft.deposit),
        FormField::MonthlyRent => Some(&mut draft.monthly_rent),
        FormField::MaintenanceFee => Some(&mut draft.maintenance_fee),
        FormField::DueDate => Some(&mut draft.due_date),
        FormField::BrokerPhone => Some(&mut draft.broker_phone),
        FormField::RentType => None,
    }
}

/// Houses the draft and focus cursor for one editor visit.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeForm {
    draft: HomeDraft,
    focus: FormField,
}

impl Default for HomeForm {
    fn default() -> HomeForm {
        HomeForm {
            draft: HomeDraft::default(),
            focus: FormField::Name,
        }
    }
}

impl HomeForm {
    /// Build a form seeded with initial values, or the default draft when
    /// the editor opens in create mode.
    ///
    pub fn with_initial(initial: Option<HomeDraft>) -> HomeForm {
        let mut form = HomeForm::default();
        form.set_all(initial.unwrap_or_default());
        form
    }

    /// Return the current draft.
    ///
    pub fn draft(&self) -> &HomeDraft {
        &self.draft
    }

    /// Return the currently focused field.
    ///
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Move focus to the next field.
    ///
    pub fn focus_next(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    /// Move focus to the previous field.
    ///
    pub fn focus_previous(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    /// Replace exactly one named text field, leaving every other field
    /// unchanged. Setting the rent-type field this way is a no-op; use
    /// `set_rent_type`.
    ///
    pub fn set_field(&mut self, field: FormField, value: &str) -> &mut Self {
        if let Some(target) = field_mut(&mut self.draft, field) {
            *target = value.to_string();
        }
        self
    }

    /// Replace the rent type.
    ///
    pub fn set_rent_type(&mut self, rent_type: RentType) -> &mut Self {
        self.draft.rent_type = rent_type;
        self
    }

    /// Flip the rent type between its two values.
    ///
    pub fn toggle_rent_type(&mut self) -> &mut Self {
        self.draft.rent_type = match self.draft.rent_type {
            RentType::Jeonse => RentType::Monthly,
            RentType::Monthly => RentType::Jeonse,
        };
        self
    }

    /// Append a character to the focused text field.
    ///
    pub fn insert_char(&mut self, c: char) -> &mut Self {
        if let Some(target) = field_mut(&mut self.draft, self.focus) {
            target.push(c);
        }
        self
    }

    /// Remove the last character from the focused text field.
    ///
    pub fn backspace(&mut self) -> &mut Self {
        if let Some(target) = field_mut(&mut self.draft, self.focus) {
            target.pop();
        }
        self
    }

    /// Replace the entire draft wholesale. Used whenever the editor's target
    /// identity changes so the form reflects the correct initial values.
    ///
    pub fn set_all(&mut self, draft: HomeDraft) -> &mut Self {
        self.draft = draft;
        self
    }

    /// Replace the draft with the all-empty default. This is the editor's
    /// "delete" gesture; saved records are left alone.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.draft = HomeDraft::default();
        self
    }

    /// Produce the draft to save: every string field trimmed, a blank name
    /// falling back to `"home"`, rent type passed through unchanged.
    ///
    pub fn submit(&self) -> HomeDraft {
        let name = self.draft.name.trim();
        HomeDraft {
            name: if name.is_empty() {
                DEFAULT_HOME_NAME.to_string()
            } else {
                name.to_string()
            },
            location: self.draft.location.trim().to_string(),
            deposit: self.draft.deposit.trim().to_string(),
            monthly_rent: self.draft.monthly_rent.trim().to_string(),
            maintenance_fee: self.draft.maintenance_fee.trim().to_string(),
            rent_type: self.draft.rent_type,
            broker_phone: self.draft.broker_phone.trim().to_string(),
            due_date: self.draft.due_date.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(FormField::Name.next(), FormField::Location);
        assert_eq!(FormField::BrokerPhone.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::BrokerPhone);
        assert_eq!(FormField::Deposit.previous(), FormField::RentType);
    }

    #[test]
    fn test_set_field_changes_exactly_one_field() {
        let mut form = HomeForm::default();
        form.set_field(FormField::Location, "Mapo-gu");
        let draft = form.draft();
        assert_eq!(draft.location, "Mapo-gu");
        assert!(draft.name.is_empty());
        assert!(draft.deposit.is_empty());
        assert!(draft.monthly_rent.is_empty());
        assert!(draft.maintenance_fee.is_empty());
        assert!(draft.broker_phone.is_empty());
        assert!(draft.due_date.is_empty());
        assert_eq!(draft.rent_type, RentType::Monthly);
    }

    #[test]
    fn test_set_field_on_rent_type_is_noop() {
        let mut form = HomeForm::default();
        form.set_field(FormField::RentType, "jeonse");
        assert_eq!(form.draft().rent_type, RentType::Monthly);
    }

    #[test]
    fn test_insert_and_backspace_route_to_focused_field() {
        let mut form = HomeForm::default();
        form.insert_char('L').insert_char('o').insert_char('f');
        form.insert_char('t').insert_char('t').backspace();
        assert_eq!(form.draft().name, "Loft");

        form.focus_next();
        assert_eq!(form.focus(), FormField::Location);
        form.insert_char('A');
        assert_eq!(form.draft().location, "A");
        assert_eq!(form.draft().name, "Loft");
    }

    #[test]
    fn test_typing_on_rent_type_focus_is_noop() {
        let mut form = HomeForm::default();
        form.focus_next().focus_next();
        assert_eq!(form.focus(), FormField::RentType);
        form.insert_char('x').backspace();
        assert_eq!(form.draft(), &HomeDraft::default());
    }

    #[test]
    fn test_set_all_replaces_draft_wholesale() {
        let mut form = HomeForm::default();
        form.set_field(FormField::Name, "stale");
        let replacement = HomeDraft {
            name: "Sunrise Villa".to_string(),
            rent_type: RentType::Jeonse,
            ..HomeDraft::default()
        };
        form.set_all(replacement.clone());
        assert_eq!(form.draft(), &replacement);
    }

    #[test]
    fn test_reset_returns_default_draft_regardless_of_prior_state() {
        let mut form = HomeForm::with_initial(Some(HomeDraft {
            name: "Loft".to_string(),
            deposit: "5000".to_string(),
            rent_type: RentType::Jeonse,
            ..HomeDraft::default()
        }));
        form.set_field(FormField::BrokerPhone, "010-1234-5678");
        form.reset();
        assert_eq!(form.draft(), &HomeDraft::default());
    }

    #[test]
    fn test_toggle_rent_type() {
        let mut form = HomeForm::default();
        form.toggle_rent_type();
        assert_eq!(form.draft().rent_type, RentType::Jeonse);
        form.toggle_rent_type();
        assert_eq!(form.draft().rent_type, RentType::Monthly);
    }

    #[test]
    fn test_submit_trims_every_string_field() {
        let mut form = HomeForm::default();
        form.set_field(FormField::Name, "  Sunrise Villa ")
            .set_field(FormField::Location, " Mapo-gu  ")
            .set_field(FormField::Deposit, " 5000 ")
            .set_field(FormField::MonthlyRent, " 65 ")
            .set_field(FormField::MaintenanceFee, " 7 ")
            .set_field(FormField::DueDate, " 2026-09-01 ")
            .set_field(FormField::BrokerPhone, " 010-1234-5678 ");
        let submitted = form.submit();
        assert_eq!(submitted.name, "Sunrise Villa");
        assert_eq!(submitted.location, "Mapo-gu");
        assert_eq!(submitted.deposit, "5000");
        assert_eq!(submitted.monthly_rent, "65");
        assert_eq!(submitted.maintenance_fee, "7");
        assert_eq!(submitted.due_date, "2026-09-01");
        assert_eq!(submitted.broker_phone, "010-1234-5678");
    }

    #[test]
    fn test_submit_blank_name_falls_back_to_home() {
        let mut form = HomeForm::default();
        assert_eq!(form.submit().name, "home");
        form.set_field(FormField::Name, "   ");
        assert_eq!(form.submit().name, "home");
    }

    #[test]
    fn test_submit_passes_rent_type_through() {
        let mut form = HomeForm::default();
        form.set_rent_type(RentType::Jeonse);
        assert_eq!(form.submit().rent_type, RentType::Jeonse);
    }
}
