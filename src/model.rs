//! Domain model for tracked rental homes.
//!
//! A `HomeRecord` is a saved listing; a `HomeDraft` is the same shape minus
//! the identifier, used while the editor screen is open.

/// Lease structure of a listing.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RentType {
    /// Large lump-sum deposit, no recurring rent.
    Jeonse,
    /// Smaller deposit plus recurring monthly rent.
    #[default]
    Monthly,
}

impl RentType {
    /// Return the display label for the rent type.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            RentType::Jeonse => "Jeonse",
            RentType::Monthly => "Monthly",
        }
    }
}

/// A saved rental-home listing.
///
/// The `id` is an opaque string, unique across the collection, assigned at
/// creation and never mutated or reused afterwards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HomeRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub deposit: String,
    pub monthly_rent: String,
    pub maintenance_fee: String,
    pub rent_type: RentType,
    pub broker_phone: String,
    pub due_date: String,
}

impl HomeRecord {
    /// Build a record from a draft and a freshly assigned id.
    ///
    pub fn from_draft(id: String, draft: HomeDraft) -> Self {
        HomeRecord {
            id,
            name: draft.name,
            location: draft.location,
            deposit: draft.deposit,
            monthly_rent: draft.monthly_rent,
            maintenance_fee: draft.maintenance_fee,
            rent_type: draft.rent_type,
            broker_phone: draft.broker_phone,
            due_date: draft.due_date,
        }
    }

    /// Project the record back into a draft, dropping the id. Used to seed
    /// the editor when opening an existing record.
    ///
    pub fn to_draft(&self) -> HomeDraft {
        HomeDraft {
            name: self.name.clone(),
            location: self.location.clone(),
            deposit: self.deposit.clone(),
            monthly_rent: self.monthly_rent.clone(),
            maintenance_fee: self.maintenance_fee.clone(),
            rent_type: self.rent_type,
            broker_phone: self.broker_phone.clone(),
            due_date: self.due_date.clone(),
        }
    }

    /// Replace every field except the id with the draft's fields.
    ///
    pub fn apply_draft(&mut self, draft: HomeDraft) {
        self.name = draft.name;
        self.location = draft.location;
        self.deposit = draft.deposit;
        self.monthly_rent = draft.monthly_rent;
        self.maintenance_fee = draft.maintenance_fee;
        self.rent_type = draft.rent_type;
        self.broker_phone = draft.broker_phone;
        self.due_date = draft.due_date;
    }
}

/// An in-progress, unsaved edit of a record's fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct HomeDraft {
    pub name: String,
    pub location: String,
    pub deposit: String,
    pub monthly_rent: String,
    pub maintenance_fee: String,
    pub rent_type: RentType,
    pub broker_phone: String,
    pub due_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rent_type_defaults_to_monthly() {
        assert_eq!(RentType::default(), RentType::Monthly);
    }

    #[test]
    fn test_rent_type_labels() {
        assert_eq!(RentType::Jeonse.label(), "Jeonse");
        assert_eq!(RentType::Monthly.label(), "Monthly");
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = HomeDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.location.is_empty());
        assert!(draft.deposit.is_empty());
        assert!(draft.monthly_rent.is_empty());
        assert!(draft.maintenance_fee.is_empty());
        assert!(draft.broker_phone.is_empty());
        assert!(draft.due_date.is_empty());
        assert_eq!(draft.rent_type, RentType::Monthly);
    }

    #[test]
    fn test_from_draft_keeps_fields_and_assigns_id() {
        let draft = HomeDraft {
            name: "Sunrise Villa".to_string(),
            location: "Mapo-gu".to_string(),
            deposit: "5000".to_string(),
            rent_type: RentType::Jeonse,
            ..HomeDraft::default()
        };
        let record = HomeRecord::from_draft("home-1".to_string(), draft);
        assert_eq!(record.id, "home-1");
        assert_eq!(record.name, "Sunrise Villa");
        assert_eq!(record.location, "Mapo-gu");
        assert_eq!(record.deposit, "5000");
        assert_eq!(record.rent_type, RentType::Jeonse);
    }

    #[test]
    fn test_to_draft_round_trip_drops_id_only() {
        let draft = HomeDraft {
            name: "Loft".to_string(),
            monthly_rent: "65".to_string(),
            ..HomeDraft::default()
        };
        let record = HomeRecord::from_draft("home-2".to_string(), draft.clone());
        assert_eq!(record.to_draft(), draft);
    }

    #[test]
    fn test_apply_draft_preserves_id() {
        let mut record = HomeRecord::from_draft("home-3".to_string(), HomeDraft::default());
        record.apply_draft(HomeDraft {
            name: "Updated".to_string(),
            ..HomeDraft::default()
        });
        assert_eq!(record.id, "home-3");
        assert_eq!(record.name, "Updated");
    }
}
