//! The journey search form.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::StationCode;
use crate::matcher::MatchConfig;
use crate::stations::StationCatalog;

use super::error::FormError;
use super::query_state::QueryState;

/// One of the two station inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    From,
    To,
}

/// Class of travel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelClass {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "ac-1")]
    AcFirst,
    #[serde(rename = "ac-2")]
    AcTwoTier,
    #[serde(rename = "ac-3")]
    AcThreeTier,
    #[serde(rename = "sleeper")]
    Sleeper,
    #[serde(rename = "second-sitting")]
    SecondSitting,
}

impl TravelClass {
    pub const ALL: [TravelClass; 6] = [
        TravelClass::All,
        TravelClass::AcFirst,
        TravelClass::AcTwoTier,
        TravelClass::AcThreeTier,
        TravelClass::Sleeper,
        TravelClass::SecondSitting,
    ];

    /// Form value, as submitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::All => "all",
            TravelClass::AcFirst => "ac-1",
            TravelClass::AcTwoTier => "ac-2",
            TravelClass::AcThreeTier => "ac-3",
            TravelClass::Sleeper => "sleeper",
            TravelClass::SecondSitting => "second-sitting",
        }
    }

    /// Human-readable label for select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            TravelClass::All => "All Classes",
            TravelClass::AcFirst => "AC First Class (1A)",
            TravelClass::AcTwoTier => "AC 2 Tier (2A)",
            TravelClass::AcThreeTier => "AC 3 Tier (3A)",
            TravelClass::Sleeper => "Sleeper (SL)",
            TravelClass::SecondSitting => "Second Sitting (2S)",
        }
    }
}

/// Reservation quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quota {
    #[default]
    General,
    Ladies,
    Tatkal,
    PremiumTatkal,
    SeniorCitizen,
}

impl Quota {
    pub const ALL: [Quota; 5] = [
        Quota::General,
        Quota::Ladies,
        Quota::Tatkal,
        Quota::PremiumTatkal,
        Quota::SeniorCitizen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quota::General => "general",
            Quota::Ladies => "ladies",
            Quota::Tatkal => "tatkal",
            Quota::PremiumTatkal => "premium-tatkal",
            Quota::SeniorCitizen => "senior-citizen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quota::General => "General",
            Quota::Ladies => "Ladies",
            Quota::Tatkal => "Tatkal",
            Quota::PremiumTatkal => "Premium Tatkal",
            Quota::SeniorCitizen => "Senior Citizen",
        }
    }
}

/// Number of travellers on one booking, 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Passengers(u8);

impl Passengers {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(count: u8) -> Result<Self, FormError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(FormError::InvalidPassengers(count))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// One more traveller, saturating at the maximum.
    pub fn increment(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// One fewer traveller, saturating at the minimum.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Passengers {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Passengers {
    type Error = FormError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Passengers> for u8 {
    fn from(p: Passengers) -> Self {
        p.0
    }
}

/// A validated search, ready to hand to a journey planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneySearch {
    pub from: StationCode,
    pub to: StationCode,
    pub date: NaiveDate,
    pub class: TravelClass,
    pub quota: Quota,
    pub passengers: Passengers,
}

/// State of the hero search form.
///
/// Each station input owns a [`QueryState`]; only one dropdown is open at
/// a time, so typing into one field closes the other's.
#[derive(Debug, Clone)]
pub struct SearchForm {
    from: QueryState,
    to: QueryState,
    active: Option<Field>,
    date: Option<NaiveDate>,
    class: TravelClass,
    quota: Quota,
    passengers: Passengers,
}

impl SearchForm {
    /// A blank form whose travel date defaults to the day after `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            from: QueryState::new(),
            to: QueryState::new(),
            active: None,
            date: today.succ_opt(),
            class: TravelClass::default(),
            quota: Quota::default(),
            passengers: Passengers::default(),
        }
    }

    /// A blank form dated from the local clock.
    pub fn for_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn field(&self, field: Field) -> &QueryState {
        match field {
            Field::From => &self.from,
            Field::To => &self.to,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut QueryState {
        match field {
            Field::From => &mut self.from,
            Field::To => &mut self.to,
        }
    }

    /// The field whose dropdown is open, if any.
    pub fn active(&self) -> Option<Field> {
        self.active
    }

    /// Handle a keystroke in one of the station inputs.
    pub fn input(
        &mut self,
        field: Field,
        text: impl Into<String>,
        catalog: &StationCatalog,
        config: &MatchConfig,
    ) {
        let other = match field {
            Field::From => Field::To,
            Field::To => Field::From,
        };
        self.field_mut(other).dismiss();
        self.field_mut(field).set_text(text, catalog, config);
        self.active = Some(field);
    }

    /// Fill a station input without offering suggestions, as when a whole
    /// form arrives at once.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.field_mut(field).replace_text(text.into());
    }

    /// Commit a suggestion in `field`. An index outside the current
    /// suggestions changes nothing.
    pub fn select(&mut self, field: Field, index: usize) -> Option<&str> {
        if index >= self.field(field).suggestions().len() {
            return None;
        }
        self.active = None;
        self.field_mut(field).select(index)
    }

    /// Close every dropdown (Escape).
    pub fn dismiss(&mut self) {
        self.from.dismiss();
        self.to.dismiss();
        self.active = None;
    }

    /// Exchange origin and destination.
    pub fn swap(&mut self) {
        let from = self.from.text().to_owned();
        let to = self.to.text().to_owned();
        self.from.replace_text(to);
        self.to.replace_text(from);
        self.active = None;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn class(&self) -> TravelClass {
        self.class
    }

    pub fn set_class(&mut self, class: TravelClass) {
        self.class = class;
    }

    pub fn quota(&self) -> Quota {
        self.quota
    }

    pub fn set_quota(&mut self, quota: Quota) {
        self.quota = quota;
    }

    pub fn passengers(&self) -> Passengers {
        self.passengers
    }

    pub fn set_passengers(&mut self, passengers: Passengers) {
        self.passengers = passengers;
    }

    pub fn increment_passengers(&mut self) {
        self.passengers = self.passengers.increment();
    }

    pub fn decrement_passengers(&mut self) {
        self.passengers = self.passengers.decrement();
    }

    /// Validate the form against the catalog.
    ///
    /// Station inputs may hold a committed display label or a bare code.
    pub fn submit(
        &self,
        catalog: &StationCatalog,
        today: NaiveDate,
    ) -> Result<JourneySearch, FormError> {
        let from_text = self.from.text().trim();
        let to_text = self.to.text().trim();
        if from_text.is_empty() || to_text.is_empty() {
            return Err(FormError::MissingStations);
        }

        let date = self.date.ok_or(FormError::MissingDate)?;

        let from = catalog
            .resolve(from_text)
            .ok_or_else(|| FormError::UnknownStation(from_text.to_string()))?
            .code();
        let to = catalog
            .resolve(to_text)
            .ok_or_else(|| FormError::UnknownStation(to_text.to_string()))?
            .code();

        if from == to {
            return Err(FormError::SameStation(from));
        }

        if date < today {
            return Err(FormError::DateInPast(date));
        }

        Ok(JourneySearch {
            from,
            to,
            date,
            class: self.class,
            quota: self.quota,
            passengers: self.passengers,
        })
    }
}
