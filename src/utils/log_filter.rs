use chrono::NaiveDate;
use entity::exercise::Exercise;

use crate::types::{error::AppError, exercise::RLogQuery};
use crate::utils::{date::parse_date, webutils::optional_field};

/// Date range and head limit applied to a user's log. The range is inclusive at
/// both ends and the limit is taken after the range filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    pub fn from_query(query: &RLogQuery) -> Result<Self, AppError> {
        let date = |value: &Option<String>, name: &str| {
            optional_field(value)
                .map(|raw| {
                    parse_date(raw).ok_or_else(|| {
                        AppError::Validation(format!("{name} is not a valid date: {raw}"))
                    })
                })
                .transpose()
        };

        let limit = optional_field(&query.limit)
            .map(|raw| {
                raw.trim().parse::<usize>().map_err(|_| {
                    AppError::Validation(format!("limit must be a non-negative integer: {raw}"))
                })
            })
            .transpose()?;

        Ok(LogFilter {
            from: date(&query.from, "from")?,
            to: date(&query.to, "to")?,
            limit,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    pub fn apply<'a>(&self, log: &'a [Exercise]) -> impl Iterator<Item = &'a Exercise> + 'a {
        let filter = *self;
        log.iter()
            .filter(move |exercise| filter.contains(exercise.date))
            .take(filter.limit.unwrap_or(usize::MAX))
    }
}
