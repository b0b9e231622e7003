use crate::domain::model::{BreedSelection, Dataset};
use std::collections::{BTreeMap, BTreeSet, HashMap};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Sorted distinct years in which the breed has at least one record.
pub fn years_present(dataset: &Dataset, breed: &BreedSelection) -> Vec<i32> {
    dataset
        .records_for(breed)
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn total_registrations(dataset: &Dataset, breed: &BreedSelection) -> i64 {
    dataset.records_for(breed).map(|r| r.total).sum()
}

/// `(year, percent)` for every year the breed appears in, ascending by year.
pub fn yearly_percentage(dataset: &Dataset, breed: &BreedSelection) -> Vec<(i32, f64)> {
    let mut all_by_year: HashMap<i32, i64> = HashMap::new();
    let mut breed_by_year: BTreeMap<i32, i64> = BTreeMap::new();

    for record in dataset.records() {
        *all_by_year.entry(record.year).or_default() += record.total;
        if record.is_breed(breed) {
            *breed_by_year.entry(record.year).or_default() += record.total;
        }
    }

    breed_by_year
        .into_iter()
        .map(|(year, total)| {
            let year_total = all_by_year.get(&year).copied().unwrap_or_default();
            (year, percentage(total, year_total))
        })
        .collect()
}

pub fn overall_percentage(dataset: &Dataset, breed: &BreedSelection) -> f64 {
    percentage(total_registrations(dataset, breed), dataset.grand_total())
}

/// Months whose summed total is at or above the mean of the breed's per-month sums.
///
/// Months come back in calendar order when every label names a month, otherwise in
/// the order they first appear in the data. Empty only when the breed has no records.
pub fn popular_months(dataset: &Dataset, breed: &BreedSelection) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, i64> = HashMap::new();

    for record in dataset.records_for(breed) {
        let entry = sums.entry(record.month.clone()).or_insert_with(|| {
            order.push(record.month.clone());
            0
        });
        *entry += record.total;
    }

    if order.is_empty() {
        return Vec::new();
    }

    let mean = sums.values().sum::<i64>() as f64 / sums.len() as f64;

    if order.iter().all(|m| calendar_rank(m).is_some()) {
        order.sort_by_key(|m| calendar_rank(m));
    }

    order
        .into_iter()
        .filter(|m| sums[m] as f64 >= mean)
        .collect()
}

/// 0-based month index for full names or prefixes of at least three letters.
pub fn calendar_rank(label: &str) -> Option<usize> {
    let label = label.trim().to_lowercase();
    if label.len() < 3 {
        return None;
    }
    MONTH_NAMES.iter().position(|name| name.starts_with(&label))
}

fn percentage(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
