//! Service adjustment entries.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::opm::to_opm_days;

/// A period of military service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilitaryEntry {
    pub start: CalendarDate,
    pub end: CalendarDate,

    /// Whether the military deposit (buyback) has been paid.
    #[serde(default)]
    pub buyback_paid: bool,

    /// Whether the service was performed in a combat zone.
    #[serde(default)]
    pub combat_zone: bool,
}

impl MilitaryEntry {
    /// Creates an entry with no buyback and no combat zone service.
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start,
            end,
            buyback_paid: false,
            combat_zone: false,
        }
    }

    #[must_use]
    pub const fn with_buyback(mut self, paid: bool) -> Self {
        self.buyback_paid = paid;
        self
    }

    #[must_use]
    pub const fn with_combat_zone(mut self, combat_zone: bool) -> Self {
        self.combat_zone = combat_zone;
        self
    }

    /// Military time counts toward retirement only once bought back,
    /// or when served in a combat zone.
    pub const fn counts_for_retirement(&self) -> bool {
        self.buyback_paid || self.combat_zone
    }

    /// Length of the service in OPM days.
    pub fn opm_days(&self) -> i64 {
        to_opm_days(self.end) - to_opm_days(self.start)
    }
}

/// A period of leave without pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LwopEntry {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl LwopEntry {
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Real elapsed days of the absence.
    pub fn span_days(&self) -> i64 {
        self.start.days_until(self.end)
    }
}
