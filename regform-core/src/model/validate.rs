//! src/model/validate.rs
//! ============================================================================
//! # Submit-Time Validation and Record Assembly
//!
//! The rule set runs in a fixed order and short-circuits at the first
//! failure, so exactly one error is surfaced per submit attempt:
//!
//! 1. every mandatory scalar field present, in declaration order;
//! 2. at least one vehicle slot selected;
//! 3. phone normalizes to exactly 10 digits.
//!
//! Age carries advisory UI bounds (18-100) but is deliberately NOT
//! range-checked here; only presence is enforced.
//!
//! [`build_record`] is the only way to obtain a [`RegistrationRecord`], so a
//! record structurally cannot exist for a draft that fails validation.

use chrono::{DateTime, Utc};
use smallvec::SmallVec;
use thiserror::Error;
use uuid::Uuid;

use crate::model::registration::{
    FieldId, PersonalInfo, RegistrationDraft, RegistrationRecord, VehicleEntry, VehicleKind,
};

/// User-input errors detected synchronously during submit. All are
/// recoverable: the user edits the draft and resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {}", .0.label())]
    MissingRequiredField(FieldId),

    #[error("Select at least one vehicle")]
    NoVehicleSelected,

    #[error("Phone number must contain exactly 10 digits")]
    InvalidPhoneFormat,
}

/// Mandatory scalar fields, checked in this order. Explicit list rather
/// than runtime field lookup, preserving single-error-per-attempt behavior.
const MANDATORY_FIELDS: [FieldId; 6] = [
    FieldId::OwnerName,
    FieldId::Phone,
    FieldId::Age,
    FieldId::City,
    FieldId::State,
    FieldId::Gender,
];

fn field_present(draft: &RegistrationDraft, field: FieldId) -> bool {
    match field {
        FieldId::OwnerName => !draft.owner_name.trim().is_empty(),
        FieldId::Phone => !draft.phone.trim().is_empty(),
        FieldId::Age => !draft.age.trim().is_empty(),
        FieldId::City => !draft.city.trim().is_empty(),
        FieldId::State => draft.state.is_some(),
        FieldId::Gender => draft.gender.is_some(),
        // Optional fields never fail the presence check.
        FieldId::Email | FieldId::Experience | FieldId::RoutePreference => true,
    }
}

/// Strip everything but digits; a 12-digit result with the `91` country
/// code drops the prefix, so `+91 9876543210` normalizes the same as
/// `9876543210`.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 12 && digits.starts_with("91") {
        digits[2..].to_owned()
    } else {
        digits
    }
}

/// Run the ordered rule set against the draft, returning the first failure.
pub fn validate(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    for field in MANDATORY_FIELDS {
        if !field_present(draft, field) {
            return Err(ValidationError::MissingRequiredField(field));
        }
    }

    if !draft.has_vehicle() {
        return Err(ValidationError::NoVehicleSelected);
    }

    if normalize_phone(&draft.phone).len() != 10 {
        return Err(ValidationError::InvalidPhoneFormat);
    }

    Ok(())
}

/// Validate the draft and assemble the immutable submission record.
///
/// Vehicles are emitted one entry per selected slot in fixed slot order;
/// `custom_type` is carried only for the "others" slot. Age is parsed
/// without range re-validation.
pub fn build_record(
    draft: &RegistrationDraft,
    registered_at: DateTime<Utc>,
) -> Result<RegistrationRecord, ValidationError> {
    validate(draft)?;

    let gender = draft
        .gender
        .ok_or(ValidationError::MissingRequiredField(FieldId::Gender))?;
    let state = draft
        .state
        .ok_or(ValidationError::MissingRequiredField(FieldId::State))?;

    let email = draft.email.trim();
    let personal_info = PersonalInfo {
        name: draft.owner_name.trim().to_owned(),
        phone: normalize_phone(&draft.phone),
        age: draft.age.trim().parse().unwrap_or(0),
        gender,
        city: draft.city.trim().to_owned(),
        state,
        email: (!email.is_empty()).then(|| email.to_owned()),
        driving_experience: draft.experience,
        route_preference: draft.route_preference,
    };

    let vehicles: SmallVec<[VehicleEntry; 4]> = draft
        .selected_kinds()
        .map(|kind| {
            let slot = draft.slot(kind);
            VehicleEntry {
                kind,
                reg_no: slot.reg_no.trim().to_owned(),
                custom_type: (kind == VehicleKind::Other && !slot.custom_type.trim().is_empty())
                    .then(|| slot.custom_type.trim().to_owned()),
            }
        })
        .collect();

    Ok(RegistrationRecord {
        id: Uuid::new_v4(),
        personal_info,
        vehicles,
        photo: draft.photo.clone(),
        registered_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registration::{Gender, RegionState};

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft {
            owner_name: "Asha Rao".into(),
            phone: "9876543210".into(),
            age: "29".into(),
            city: "Hyderabad".into(),
            gender: Some(Gender::Female),
            state: Some(RegionState::Telangana),
            ..RegistrationDraft::default()
        };
        let bike = draft.slot_mut(VehicleKind::TwoWheeler);
        bike.selected = true;
        bike.reg_no = "TS09AB1234".into();
        draft
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn each_missing_mandatory_field_is_named() {
        let cases: [(fn(&mut RegistrationDraft), FieldId); 6] = [
            (|d| d.owner_name.clear(), FieldId::OwnerName),
            (|d| d.phone.clear(), FieldId::Phone),
            (|d| d.age.clear(), FieldId::Age),
            (|d| d.city.clear(), FieldId::City),
            (|d| d.state = None, FieldId::State),
            (|d| d.gender = None, FieldId::Gender),
        ];

        for (clear, expected) in cases {
            let mut draft = valid_draft();
            clear(&mut draft);
            assert_eq!(
                validate(&draft),
                Err(ValidationError::MissingRequiredField(expected))
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut draft = valid_draft();
        draft.owner_name = "   ".into();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingRequiredField(FieldId::OwnerName))
        );
    }

    #[test]
    fn missing_field_reported_before_vehicle_rule() {
        let mut draft = valid_draft();
        draft.owner_name.clear();
        draft.slot_mut(VehicleKind::TwoWheeler).selected = false;
        // Field rule runs first; only one error per attempt.
        assert_eq!(
            validate(&draft),
            Err(ValidationError::MissingRequiredField(FieldId::OwnerName))
        );
    }

    #[test]
    fn no_vehicle_selected() {
        let mut draft = valid_draft();
        draft.slot_mut(VehicleKind::TwoWheeler).selected = false;
        assert_eq!(validate(&draft), Err(ValidationError::NoVehicleSelected));
    }

    #[test]
    fn phone_normalization_accepts_common_formats() {
        for raw in ["9876543210", "98765-43210", "+91 9876543210"] {
            assert_eq!(normalize_phone(raw), "9876543210", "raw: {raw}");
            let mut draft = valid_draft();
            draft.phone = raw.into();
            assert_eq!(validate(&draft), Ok(()), "raw: {raw}");
        }
    }

    #[test]
    fn short_phone_fails() {
        let mut draft = valid_draft();
        draft.phone = "12345".into();
        assert_eq!(validate(&draft), Err(ValidationError::InvalidPhoneFormat));
    }

    #[test]
    fn age_bounds_are_not_enforced() {
        // Presence only: out-of-range ages still pass.
        for age in ["7", "140"] {
            let mut draft = valid_draft();
            draft.age = age.into();
            assert_eq!(validate(&draft), Ok(()), "age: {age}");
        }
    }

    #[test]
    fn record_carries_parsed_age_and_single_vehicle() {
        let record = build_record(&valid_draft(), Utc::now()).unwrap();
        assert_eq!(record.personal_info.age, 29);
        assert_eq!(record.personal_info.phone, "9876543210");
        assert_eq!(record.vehicles.len(), 1);
        assert_eq!(record.vehicles[0].kind, VehicleKind::TwoWheeler);
        assert_eq!(record.vehicles[0].reg_no, "TS09AB1234");
        assert_eq!(record.vehicles[0].custom_type, None);
    }

    #[test]
    fn record_vehicles_in_slot_order() {
        let mut draft = valid_draft();
        // Select in reverse click order; emission order must not change.
        draft.toggle_slot(VehicleKind::Other);
        draft.slot_mut(VehicleKind::Other).reg_no = "TS10CD5678".into();
        draft.slot_mut(VehicleKind::Other).custom_type = "Auto rickshaw".into();

        let record = build_record(&draft, Utc::now()).unwrap();
        let kinds: Vec<VehicleKind> = record.vehicles.iter().map(|v| v.kind).collect();
        assert_eq!(kinds, vec![VehicleKind::TwoWheeler, VehicleKind::Other]);
        assert_eq!(
            record.vehicles[1].custom_type.as_deref(),
            Some("Auto rickshaw")
        );
    }

    #[test]
    fn custom_type_only_for_other_slot() {
        let mut draft = valid_draft();
        // A stray custom type on a regular slot must not leak into the record.
        draft.slot_mut(VehicleKind::TwoWheeler).custom_type = "scooter".into();
        let record = build_record(&draft, Utc::now()).unwrap();
        assert_eq!(record.vehicles[0].custom_type, None);
    }

    #[test]
    fn record_json_shape() {
        let mut draft = valid_draft();
        draft.email = "asha@example.com".into();
        let record = build_record(&draft, Utc::now()).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["personalInfo"]["age"], 29);
        assert_eq!(json["personalInfo"]["gender"], "female");
        assert_eq!(json["personalInfo"]["state"], "Telangana");
        assert_eq!(json["personalInfo"]["email"], "asha@example.com");
        assert_eq!(json["vehicles"][0]["type"], "bike");
        assert_eq!(json["vehicles"][0]["number"], "TS09AB1234");
        assert!(json["vehicles"][0].get("customType").is_none());
        // No photo chosen: the field is omitted entirely.
        assert!(json.get("photo").is_none());
        assert!(json["registeredAt"].as_str().is_some());
    }

    #[test]
    fn empty_email_is_omitted() {
        let record = build_record(&valid_draft(), Utc::now()).unwrap();
        assert_eq!(record.personal_info.email, None);
    }
}
