//! Patient list view: status filter, then text search, then a stable sort.
//!
//! The stages always run in that order and each one only sees the previous
//! stage's output. Field values that are missing or malformed are coerced
//! (empty string, zero, epoch) instead of failing; shape validation happens
//! upstream.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Read access to the patient fields the list view needs.
///
/// Every accessor is optional so partially populated records can still be
/// listed.
pub trait PatientFields {
    fn name(&self) -> Option<&str>;
    fn phone(&self) -> Option<&str>;
    fn national_id(&self) -> Option<&str>;
    fn status(&self) -> Option<&str>;
    fn cost(&self) -> Option<f64>;
    fn created_at(&self) -> Option<Timestamp>;
}

/// Which review states are shown.
///
/// `Completed` shows approved records. Rejected records have no dedicated
/// filter and only appear under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn parse(value: &str) -> Option<StatusFilter> {
        match value {
            "all" => Some(StatusFilter::All),
            "completed" => Some(StatusFilter::Completed),
            "pending" => Some(StatusFilter::Pending),
            _ => None,
        }
    }

    fn matches(self, status: Option<&str>) -> bool {
        let status = status.unwrap_or_default();
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => status.eq_ignore_ascii_case("approved"),
            StatusFilter::Pending => status.eq_ignore_ascii_case("pending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "cost")]
    Cost,
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl SortField {
    pub fn parse(value: &str) -> Option<SortField> {
        match value {
            "name" => Some(SortField::Name),
            "phone" => Some(SortField::Phone),
            "status" => Some(SortField::Status),
            "cost" => Some(SortField::Cost),
            "createdAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<SortDirection> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// View configuration for [`transform_patients`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub status_filter: StatusFilter,
    pub search: String,
    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
}

impl Default for ListOptions {
    /// Initial table view: everything, newest first.
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::All,
            search: String::new(),
            sort_field: Some(SortField::CreatedAt),
            sort_direction: Some(SortDirection::Desc),
        }
    }
}

impl ListOptions {
    /// No filtering, no search and no sorting: output equals input.
    pub fn unsorted() -> Self {
        Self {
            status_filter: StatusFilter::All,
            search: String::new(),
            sort_field: None,
            sort_direction: None,
        }
    }

    /// Build options from raw query-string values.
    ///
    /// Unknown values are dropped: an unknown status shows all records, an
    /// unknown sort field or direction disables sorting. When neither sort
    /// parameter is supplied the default newest-first order applies.
    pub fn from_query(
        status: Option<&str>,
        search: Option<&str>,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        let (sort_field, sort_direction) = if sort.is_none() && direction.is_none() {
            (defaults.sort_field, defaults.sort_direction)
        } else {
            (
                sort.and_then(SortField::parse),
                direction.and_then(SortDirection::parse),
            )
        };

        Self {
            status_filter: status.and_then(StatusFilter::parse).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
            sort_field,
            sort_direction,
        }
    }
}

/// Run the full pipeline over a copy of `records`.
///
/// The input slice is never modified; identical input and options always
/// produce identical output.
pub fn transform_patients<T>(records: &[T], options: &ListOptions) -> Vec<T>
where
    T: PatientFields + Clone,
{
    let filtered = filter_by_status(records.to_vec(), options.status_filter);
    let mut found = search(filtered, &options.search);
    if let (Some(field), Some(direction)) = (options.sort_field, options.sort_direction) {
        sort(&mut found, field, direction);
    }
    found
}

/// Stage 1: keep records whose status matches `filter`.
pub fn filter_by_status<T: PatientFields>(mut records: Vec<T>, filter: StatusFilter) -> Vec<T> {
    if filter != StatusFilter::All {
        records.retain(|p| filter.matches(p.status()));
    }
    records
}

/// Stage 2: keep records whose name, phone or national id contains the
/// trimmed, lower-cased `query`. An empty query keeps everything.
pub fn search<T: PatientFields>(mut records: Vec<T>, query: &str) -> Vec<T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records;
    }

    records.retain(|p| {
        [p.name(), p.phone(), p.national_id()]
            .into_iter()
            .any(|field| lowered(field).contains(&query))
    });
    records
}

/// Stage 3: stable sort in place. Equal keys keep their relative order.
pub fn sort<T: PatientFields>(records: &mut [T], field: SortField, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare<T: PatientFields>(a: &T, b: &T, field: SortField) -> Ordering {
    match field {
        SortField::Cost => numeric(a.cost())
            .partial_cmp(&numeric(b.cost()))
            .unwrap_or(Ordering::Equal),
        SortField::CreatedAt => epoch_millis(a.created_at()).cmp(&epoch_millis(b.created_at())),
        SortField::Name => lowered(a.name()).cmp(&lowered(b.name())),
        SortField::Phone => lowered(a.phone()).cmp(&lowered(b.phone())),
        SortField::Status => lowered(a.status()).cmp(&lowered(b.status())),
    }
}

fn lowered(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

fn numeric(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn epoch_millis(value: Option<Timestamp>) -> i64 {
    value.map(|ts| ts.timestamp_millis()).unwrap_or(0)
}
