//! The catalog's filter/sort pipeline.
//!
//! Pure transformation: given the rows already fetched under the upstream
//! query predicate and the user's criteria, produce the ordered subset to
//! render. Never mutates its input and never touches the network.

use std::cmp::Ordering;

use rand::seq::SliceRandom;

use crate::catalog::criteria::{FilterCriteria, SortKey, ON_SALE};
use crate::models::PropertyRecord;

/// Filter and order the catalog for display.
///
/// The output is a subsequence of `records` under the matching predicate,
/// reordered by the criteria's sort key. The sort is stable, which the
/// default order relies on: within the "On sale"/other partition, equal
/// prices keep their input order.
pub fn filter_and_sort(records: &[PropertyRecord], criteria: &FilterCriteria) -> Vec<PropertyRecord> {
    let mut filtered: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect();

    filtered.sort_by(comparator(criteria.sort_key));
    filtered
}

fn matches(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if let Some(term) = criteria.search_term.as_deref() {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !search_matches(record, &term) {
            return false;
        }
    }
    criteria.area.matches(&record.area_name)
        && criteria.unit_type.matches(&record.normalized_type)
        && criteria.developer.matches(&record.developer_name)
        && criteria.status.matches(&record.status)
        && criteria.price_range.contains(record.min_price_aed)
}

/// Case-normalized substring match, OR across the three searchable fields.
fn search_matches(record: &PropertyRecord, term: &str) -> bool {
    record.property_name.to_lowercase().contains(term)
        || record.area_name.to_lowercase().contains(term)
        || record.developer_name.to_lowercase().contains(term)
}

fn comparator(key: SortKey) -> impl FnMut(&PropertyRecord, &PropertyRecord) -> Ordering {
    move |a, b| match key {
        SortKey::PriceAsc => price_of(a).cmp(&price_of(b)),
        SortKey::PriceDesc => price_of(b).cmp(&price_of(a)),
        SortKey::AreaAsc => area_of(a).total_cmp(&area_of(b)),
        SortKey::AreaDesc => area_of(b).total_cmp(&area_of(a)),
        SortKey::NameAsc => name_key(a).cmp(&name_key(b)),
        SortKey::NameDesc => name_key(b).cmp(&name_key(a)),
        SortKey::Featured => {
            let a_on_sale = a.sale_status == ON_SALE;
            let b_on_sale = b.sale_status == ON_SALE;
            // "On sale" partition first, ascending price within it.
            b_on_sale
                .cmp(&a_on_sale)
                .then_with(|| price_of(a).cmp(&price_of(b)))
        }
    }
}

fn price_of(record: &PropertyRecord) -> i64 {
    record.min_price_aed.unwrap_or(0)
}

fn area_of(record: &PropertyRecord) -> f64 {
    record.units_area_from_m2.unwrap_or(0.0)
}

fn name_key(record: &PropertyRecord) -> String {
    record.property_name.to_lowercase()
}

/// Listing-variety shuffle (Fisher–Yates) used by pages that want a fresh
/// arrangement on every load. Must run on the fetched set before
/// [`filter_and_sort`]; the deterministic sort would undo it otherwise.
pub fn shuffle(records: &mut [PropertyRecord]) {
    records.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::criteria::{CategoryFilter, PriceRange};

    fn record(name: &str, area: &str, developer: &str, price: Option<i64>) -> PropertyRecord {
        PropertyRecord {
            row_id: format!("row-{name}"),
            property_id: 1,
            property_name: name.to_string(),
            area_name: area.to_string(),
            developer_name: developer.to_string(),
            normalized_type: "Apartments".to_string(),
            furnishing: String::new(),
            status: "Under construction".to_string(),
            sale_status: "Presale".to_string(),
            readiness: String::new(),
            min_price_aed: price,
            max_price_aed: price.map(|p| p * 2),
            units_area_from_m2: Some(40.0),
            units_area_to_m2: Some(120.0),
            property_cover_image_url: "https://img/cover.jpg".to_string(),
            interior_images: None,
            lobby_images: None,
            architecture_images: None,
            has_escrow: false,
            is_partner_project: false,
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = filter_and_sort(&[], &FilterCriteria::default());
        assert!(out.is_empty());
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let records = vec![
            record("Alpha Tower", "Business Bay", "Emaar", Some(500_000)),
            record("Beta Residence", "JVC", "DAMAC", Some(1_500_000)),
            record("Gamma Heights", "Business Bay", "Sobha", None),
        ];
        let criteria = FilterCriteria {
            area: CategoryFilter::Exactly("Business Bay".to_string()),
            ..Default::default()
        };
        let out = filter_and_sort(&records, &criteria);
        assert_eq!(out.len(), 2);
        for r in &out {
            assert!(records.iter().any(|input| input.row_id == r.row_id));
        }
        // Input untouched.
        assert_eq!(records[1].property_name, "Beta Residence");
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            record("Alpha Tower", "Business Bay", "Emaar", Some(900_000)),
            record("Beta Residence", "JVC", "DAMAC", Some(300_000)),
            record("Gamma Heights", "Dubai Marina", "Sobha", Some(700_000)),
        ];
        let criteria = FilterCriteria {
            price_range: PriceRange::Between(0, 1_000_000),
            sort_key: SortKey::PriceAsc,
            ..Default::default()
        };
        let once = filter_and_sort(&records, &criteria);
        let twice = filter_and_sort(&once, &criteria);
        let ids: Vec<_> = once.iter().map(|r| &r.row_id).collect();
        let ids_twice: Vec<_> = twice.iter().map(|r| &r.row_id).collect();
        assert_eq!(ids, ids_twice);
    }

    #[test]
    fn search_is_case_insensitive_or_across_fields() {
        let records = vec![
            record("Creek Vista", "Dubai Creek Harbour", "Emaar", Some(1_000_000)),
            record("Marina Gate", "Dubai Marina", "Select Group", Some(2_000_000)),
        ];
        let criteria = FilterCriteria {
            search_term: Some("emaar".to_string()),
            ..Default::default()
        };
        let out = filter_and_sort(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].property_name, "Creek Vista");

        // Matching on the area field alone is enough.
        let criteria = FilterCriteria {
            search_term: Some("MARINA".to_string()),
            ..Default::default()
        };
        let out = filter_and_sort(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].property_name, "Marina Gate");
    }

    #[test]
    fn price_range_includes_null_price_as_zero() {
        let records = vec![
            record("Priced Low", "A", "D1", Some(500_000)),
            record("Priced High", "B", "D2", Some(1_500_000)),
            record("Unpriced", "C", "D3", None),
        ];
        let criteria = FilterCriteria {
            price_range: PriceRange::parse("0-1000000"),
            ..Default::default()
        };
        let names: Vec<_> = filter_and_sort(&records, &criteria)
            .into_iter()
            .map(|r| r.property_name)
            .collect();
        // Null defaults to 0, which lies inside [0, 1M].
        assert_eq!(names, vec!["Unpriced", "Priced Low"]);

        // A positive lower bound excludes the unpriced record.
        let criteria = FilterCriteria {
            price_range: PriceRange::parse("400000-1000000"),
            ..Default::default()
        };
        let names: Vec<_> = filter_and_sort(&records, &criteria)
            .into_iter()
            .map(|r| r.property_name)
            .collect();
        assert_eq!(names, vec!["Priced Low"]);
    }

    #[test]
    fn default_order_partitions_on_sale_first() {
        let mut presale = record("Presale Project", "A", "D1", Some(800_000));
        presale.sale_status = "Presale".to_string();
        let mut on_sale = record("On Sale Project", "B", "D2", Some(800_000));
        on_sale.sale_status = "On sale".to_string();

        // Either input order: "On sale" wins at equal price.
        for records in [
            vec![presale.clone(), on_sale.clone()],
            vec![on_sale.clone(), presale.clone()],
        ] {
            let out = filter_and_sort(&records, &FilterCriteria::default());
            assert_eq!(out[0].property_name, "On Sale Project");
        }
    }

    #[test]
    fn default_order_sorts_by_price_within_partition() {
        let mut cheap = record("Cheap", "A", "D1", Some(400_000));
        cheap.sale_status = "On sale".to_string();
        let mut dear = record("Dear", "B", "D2", Some(900_000));
        dear.sale_status = "On sale".to_string();
        let mut presale = record("Presale Cheapest", "C", "D3", Some(100_000));
        presale.sale_status = "Presale".to_string();

        let out = filter_and_sort(&[dear, presale, cheap], &FilterCriteria::default());
        let names: Vec<_> = out.into_iter().map(|r| r.property_name).collect();
        assert_eq!(names, vec!["Cheap", "Dear", "Presale Cheapest"]);
    }

    #[test]
    fn name_desc_orders_reverse_alphabetically() {
        let records = vec![
            record("Alpha Tower", "A", "D1", Some(1)),
            record("Beta Residence", "B", "D2", Some(2)),
        ];
        let criteria = FilterCriteria {
            sort_key: SortKey::NameDesc,
            ..Default::default()
        };
        let names: Vec<_> = filter_and_sort(&records, &criteria)
            .into_iter()
            .map(|r| r.property_name)
            .collect();
        assert_eq!(names, vec!["Beta Residence", "Alpha Tower"]);
    }

    #[test]
    fn area_sort_treats_missing_as_zero() {
        let mut no_area = record("No Area", "A", "D1", Some(1));
        no_area.units_area_from_m2 = None;
        let mut small = record("Small", "B", "D2", Some(2));
        small.units_area_from_m2 = Some(35.0);
        let mut large = record("Large", "C", "D3", Some(3));
        large.units_area_from_m2 = Some(200.0);

        let criteria = FilterCriteria {
            sort_key: SortKey::AreaAsc,
            ..Default::default()
        };
        let names: Vec<_> = filter_and_sort(&[large, no_area, small], &criteria)
            .into_iter()
            .map(|r| r.property_name)
            .collect();
        assert_eq!(names, vec!["No Area", "Small", "Large"]);
    }

    #[test]
    fn all_filters_excluding_everything_is_empty_not_an_error() {
        let records = vec![record("Alpha", "A", "D1", Some(1))];
        let criteria = FilterCriteria {
            developer: CategoryFilter::Exactly("Nobody".to_string()),
            ..Default::default()
        };
        assert!(filter_and_sort(&records, &criteria).is_empty());
    }

    #[test]
    fn shuffle_keeps_the_same_records() {
        let mut records: Vec<_> = (0..20)
            .map(|i| record(&format!("P{i}"), "A", "D", Some(i)))
            .collect();
        let before: Vec<_> = records.iter().map(|r| r.row_id.clone()).collect();
        shuffle(&mut records);
        let mut after: Vec<_> = records.iter().map(|r| r.row_id.clone()).collect();
        after.sort();
        let mut before_sorted = before;
        before_sorted.sort();
        assert_eq!(before_sorted, after);
    }
}
