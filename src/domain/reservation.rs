use crate::errors::ServerError;
use crate::store::models::Cabin;
use chrono::NaiveDate;

/// A guest's in-progress date selection. Carried explicitly through
/// query params and call arguments, never in ambient state; either
/// endpoint may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl CandidateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Lenient query-param parsing: anything that isn't a proper
    /// ISO date reads as "not selected yet".
    pub fn from_params(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_day),
            to: to.and_then(parse_day),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Derived pricing for a complete range. Never stored; recomputed from
/// the cabin row whenever it is needed, so a tampered form price can't
/// get in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub nights: i64,
    pub nightly_rate: i64,
    pub total: i64,
}

/// Price a candidate range against a cabin.
///
/// `Ok(None)` until both endpoints are chosen, and for an inverted
/// range. A same-day range quotes as zero nights — displayable, but the
/// booking commands refuse to submit it. A discount larger than the
/// nightly price can only come from corrupt store data and is surfaced
/// as a fault rather than a negative total.
pub fn quote(cabin: &Cabin, range: &CandidateRange) -> Result<Option<PriceQuote>, ServerError> {
    if cabin.discount > cabin.regular_price {
        return Err(ServerError::BadRequest(
            "cabin discount exceeds its nightly price".to_string(),
        ));
    }

    let (Some(from), Some(to)) = (range.from, range.to) else {
        return Ok(None);
    };
    if from > to {
        return Ok(None);
    }

    let nights = (to - from).num_days();
    let nightly_rate = cabin.regular_price - cabin.discount;

    Ok(Some(PriceQuote {
        nights,
        nightly_rate,
        total: nights * nightly_rate,
    }))
}

/// Calendar click rule. With nothing selected (or a finished range) a
/// click starts over at `day`; with only a start set, a later day
/// completes the range and an earlier day restarts it.
pub fn select_day(range: &CandidateRange, day: NaiveDate) -> CandidateRange {
    match (range.from, range.to) {
        (Some(from), None) if day > from => CandidateRange {
            from: Some(from),
            to: Some(day),
        },
        _ => CandidateRange {
            from: Some(day),
            to: None,
        },
    }
}
