//! src/model/registration.rs
//! ============================================================================
//! # Registration Data Model: Draft and Record
//!
//! `RegistrationDraft` is the single mutable working state for one
//! form-filling session. `RegistrationRecord` is the immutable structure
//! derived from a valid draft at submission time and handed to the
//! submission sink; the core never retains it.
//!
//! The four vehicle slots are a fixed array indexed by [`VehicleKind`], so
//! the "other"-only custom type field is statically distinguishable instead
//! of hiding behind a generic mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// Exclusive gender choice; re-selecting replaces the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Fixed list of region names the state selector offers, plus `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionState {
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
    Delhi,
    Gujarat,
    Karnataka,
    Kerala,
    Maharashtra,
    Punjab,
    Rajasthan,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Telangana,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    #[serde(rename = "West Bengal")]
    WestBengal,
    Other,
}

impl RegionState {
    pub const ALL: [Self; 13] = [
        Self::AndhraPradesh,
        Self::Delhi,
        Self::Gujarat,
        Self::Karnataka,
        Self::Kerala,
        Self::Maharashtra,
        Self::Punjab,
        Self::Rajasthan,
        Self::TamilNadu,
        Self::Telangana,
        Self::UttarPradesh,
        Self::WestBengal,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Delhi => "Delhi",
            Self::Gujarat => "Gujarat",
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::Maharashtra => "Maharashtra",
            Self::Punjab => "Punjab",
            Self::Rajasthan => "Rajasthan",
            Self::TamilNadu => "Tamil Nadu",
            Self::Telangana => "Telangana",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::WestBengal => "West Bengal",
            Self::Other => "Other",
        }
    }
}

/// Optional driving experience bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBucket {
    UnderOneYear,
    OneToFive,
    FiveToTen,
    OverTen,
}

impl ExperienceBucket {
    pub const ALL: [Self; 4] = [
        Self::UnderOneYear,
        Self::OneToFive,
        Self::FiveToTen,
        Self::OverTen,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOneYear => "< 1 year",
            Self::OneToFive => "1-5 years",
            Self::FiveToTen => "5-10 years",
            Self::OverTen => "10+ years",
        }
    }
}

/// Optional route preference for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    Fastest,
    Shortest,
    Scenic,
}

impl RoutePreference {
    pub const ALL: [Self; 3] = [Self::Fastest, Self::Shortest, Self::Scenic];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Fastest => "Fastest",
            Self::Shortest => "Shortest",
            Self::Scenic => "Scenic",
        }
    }
}

/// The four fixed vehicle slots, in declaration (= emission) order.
///
/// The serde tags are the wire names the submission sink receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    #[serde(rename = "bike")]
    TwoWheeler,
    #[serde(rename = "car")]
    FourWheeler,
    #[serde(rename = "heavy")]
    Heavy,
    #[serde(rename = "others")]
    Other,
}

impl VehicleKind {
    pub const ALL: [Self; 4] = [Self::TwoWheeler, Self::FourWheeler, Self::Heavy, Self::Other];

    /// Position of this slot in the fixed declaration order.
    pub const fn index(self) -> usize {
        match self {
            Self::TwoWheeler => 0,
            Self::FourWheeler => 1,
            Self::Heavy => 2,
            Self::Other => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoWheeler => "Two wheeler",
            Self::FourWheeler => "Four wheeler",
            Self::Heavy => "Heavy vehicle",
            Self::Other => "Other",
        }
    }
}

/// Per-slot working state. `custom_type` is only meaningful for the
/// [`VehicleKind::Other`] slot; the other slots never render or emit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotState {
    pub selected: bool,
    pub reg_no: String,
    pub custom_type: String,
}

/// Scalar form fields, named for error reporting and focus handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    OwnerName,
    Phone,
    Age,
    Gender,
    City,
    State,
    Email,
    Experience,
    RoutePreference,
}

impl FieldId {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OwnerName => "owner name",
            Self::Phone => "phone number",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::City => "city",
            Self::State => "state",
            Self::Email => "email",
            Self::Experience => "driving experience",
            Self::RoutePreference => "route preference",
        }
    }
}

/// Mutable working state for one form-filling session.
///
/// Field updates replace values without validation; all rules run at
/// submit time (see [`crate::model::validate`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub owner_name: String,
    pub phone: String,
    /// Kept as text until submit; the input layer only admits digits.
    pub age: String,
    pub city: String,
    /// Empty means not provided.
    pub email: String,
    pub gender: Option<Gender>,
    pub state: Option<RegionState>,
    pub experience: Option<ExperienceBucket>,
    pub route_preference: Option<RoutePreference>,
    pub slots: [SlotState; 4],
    /// Data-URL of the chosen profile picture; a later choice replaces it.
    pub photo: Option<String>,
}

impl RegistrationDraft {
    pub fn slot(&self, kind: VehicleKind) -> &SlotState {
        &self.slots[kind.index()]
    }

    pub fn slot_mut(&mut self, kind: VehicleKind) -> &mut SlotState {
        &mut self.slots[kind.index()]
    }

    /// Exclusive choice: a new selection replaces the previous one.
    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// Flip one slot's selection; unrelated slots and fields are untouched.
    pub fn toggle_slot(&mut self, kind: VehicleKind) {
        let slot = self.slot_mut(kind);
        slot.selected = !slot.selected;
    }

    pub fn has_vehicle(&self) -> bool {
        self.slots.iter().any(|s| s.selected)
    }

    /// Selected slots in fixed declaration order, regardless of click order.
    pub fn selected_kinds(&self) -> impl Iterator<Item = VehicleKind> + '_ {
        VehicleKind::ALL
            .into_iter()
            .filter(|kind| self.slot(*kind).selected)
    }
}

/// Personal-info block of the emitted record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    /// Normalized 10-digit form.
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub city: String,
    pub state: RegionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driving_experience: Option<ExperienceBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_preference: Option<RoutePreference>,
}

/// One emitted vehicle; `custom_type` is `Some` only for the "others" slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEntry {
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    #[serde(rename = "number")]
    pub reg_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
}

/// Immutable record built once per successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub vehicles: SmallVec<[VehicleEntry; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Captured at submit time; serializes as ISO-8601.
    pub registered_at: DateTime<Utc>,
}
