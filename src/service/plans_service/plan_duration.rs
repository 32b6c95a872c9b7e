use crate::payment_provider::{Recurring, RecurringInterval};
use strum::EnumString;

///
/// Billing durations offered for plans, parsed from their exact labels
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
pub enum PlanDuration {
    #[default]
    #[strum(serialize = "1 month")]
    OneMonth,
    #[strum(serialize = "3 months")]
    ThreeMonths,
    #[strum(serialize = "6 months")]
    SixMonths,
    #[strum(serialize = "1 year")]
    OneYear,
}

impl PlanDuration {
    ///
    /// Unrecognized or missing label falls back to one month, it is never an error.
    /// New labels have to be added as variants, they are not guessed.
    ///
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::parse::<Self>) {
            Some(Ok(duration)) => duration,
            _ => {
                tracing::warn!(?label, "unrecognized plan duration, billing monthly");
                Self::default()
            }
        }
    }

    pub fn recurring(self) -> Recurring {
        let (interval, interval_count) = match self {
            PlanDuration::OneMonth => (RecurringInterval::Month, 1),
            PlanDuration::ThreeMonths => (RecurringInterval::Month, 3),
            PlanDuration::SixMonths => (RecurringInterval::Month, 6),
            PlanDuration::OneYear => (RecurringInterval::Year, 1),
        };

        Recurring {
            interval,
            interval_count,
        }
    }
}
