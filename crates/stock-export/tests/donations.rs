//! Donations export tests.

mod common;

use rust_decimal::Decimal;
use stock_export::{ExportError, base_headers, export_donations};
use stock_model::{Cell, DateStyle, Donation, DonationSource, Item, LineItem, MoneyStyle, ReportKind};

use common::{fixture, start_time, tail_integers};

const BASE: usize = 8;

#[test]
fn header_is_base_columns_then_sorted_items() {
    let fixture = fixture();
    let table = export_donations(&fixture.organization, &fixture.donations()).unwrap();

    let mut expected: Vec<String> = base_headers(ReportKind::Donations)
        .into_iter()
        .map(String::from)
        .collect();
    expected.extend(
        ["Baby Wipes", "Dupe Item", "item_0", "item_1", "item_2"].map(String::from),
    );
    assert_eq!(table.header(), expected.as_slice());
}

#[test]
fn rows_aggregate_duplicate_line_items() {
    let fixture = fixture();
    let donations = fixture.donations();
    let table = export_donations(&fixture.organization, &donations).unwrap();

    assert_eq!(table.record_count(), donations.len());
    let first = &table.rows()[0];
    assert_eq!(
        first[..BASE],
        [
            Cell::text("Donation Site"),
            Cell::date(start_time().date_naive(), DateStyle::Iso),
            Cell::text("Space Needle 0"),
            Cell::text("Main"),
            Cell::integer(15),
            Cell::integer(2),
            Cell::money(Decimal::new(1500, 2), MoneyStyle::Plain),
            Cell::text("This is the 0-th donation in the test."),
        ]
    );
    // Baby Wipes, Dupe Item, item_0, item_1, item_2
    assert_eq!(tail_integers(first, 5), vec![7, 8, 0, 0, 0]);
    assert_eq!(tail_integers(&table.rows()[1], 5), vec![0, 0, 1, 0, 0]);
    assert_eq!(tail_integers(&table.rows()[3], 5), vec![0, 0, 0, 0, 3]);
}

#[test]
fn rows_keep_input_order() {
    let fixture = fixture();
    let mut donations = fixture.donations();
    donations.reverse();
    let table = export_donations(&fixture.organization, &donations).unwrap();
    let details: Vec<&Cell> = table.rows().iter().map(|row| &row[2]).collect();
    assert_eq!(
        details,
        [
            &Cell::text("Space Needle 3"),
            &Cell::text("Space Needle 2"),
            &Cell::text("Space Needle 1"),
            &Cell::text("Space Needle 0"),
        ]
    );
}

#[test]
fn unused_item_is_a_zero_column() {
    let mut fixture = fixture();
    fixture.add_item(Item::new(20u64, "Unused Item"));
    let table = export_donations(&fixture.organization, &fixture.donations()).unwrap();

    let column = table.column_index("Unused Item").expect("unused item column");
    for row in table.rows() {
        assert_eq!(row[column], Cell::integer(0));
    }
}

#[test]
fn inactive_item_is_a_zero_column() {
    let mut fixture = fixture();
    fixture.add_item(Item::new(21u64, "Inactive Item").inactive());
    let table = export_donations(&fixture.organization, &fixture.donations()).unwrap();

    let column = table.column_index("Inactive Item").expect("inactive item column");
    for row in table.rows() {
        assert_eq!(row[column], Cell::integer(0));
    }
}

#[test]
fn item_columns_sort_case_insensitively() {
    let organization = stock_model::Organization::new(1u64, "Org")
        .with_item(Item::new(1u64, "Zebra"))
        .with_item(Item::new(2u64, "apple"))
        .with_item(Item::new(3u64, "Banana"));
    let donation = Donation::new(1u64, start_time(), DonationSource::Misc);
    let table = export_donations(&organization, &[donation]).unwrap();
    assert_eq!(&table.header()[BASE..], ["apple", "Banana", "Zebra"]);
}

#[test]
fn line_items_match_columns_case_insensitively() {
    let organization = stock_model::Organization::new(1u64, "Org")
        .with_item(Item::new(1u64, "Wipes"))
        .with_item(Item::new(2u64, "WIPES"));
    let donation = Donation::new(1u64, start_time(), DonationSource::Misc)
        .with_line_item(LineItem::new(1u64, "Wipes", 2))
        .with_line_item(LineItem::new(2u64, "WIPES", 3));
    let table = export_donations(&organization, &[donation]).unwrap();

    assert_eq!(&table.header()[BASE..], ["Wipes"]);
    assert_eq!(tail_integers(&table.rows()[0], 1), vec![5]);
    assert_eq!(table.rows()[0][5], Cell::integer(1));
}

#[test]
fn empty_record_set_is_header_only() {
    let fixture = fixture();
    let table = export_donations(&fixture.organization, &[]).unwrap();
    assert_eq!(table.record_count(), 0);
    assert_eq!(table.column_count(), BASE + 5);
    assert_eq!(table.into_matrix().len(), 1);
}

#[test]
fn empty_catalog_is_base_columns_only() {
    let organization = stock_model::Organization::new(1u64, "Org");
    let donation = Donation::new(1u64, start_time(), DonationSource::Manufacturer);
    let table = export_donations(&organization, &[donation]).unwrap();
    assert_eq!(table.column_count(), BASE);
    assert_eq!(table.rows()[0][2], Cell::Blank);
}

#[test]
fn misc_details_come_from_truncated_comment() {
    let organization = stock_model::Organization::new(1u64, "Org");
    let mut donation = Donation::new(1u64, start_time(), DonationSource::Misc);
    donation.comment = Some("Dropped off by a neighbor on Tuesday morning".to_string());
    let table = export_donations(&organization, &[donation]).unwrap();
    assert_eq!(table.rows()[0][2], Cell::text("Dropped off by a..."));
}

#[test]
fn line_item_outside_catalog_is_fatal() {
    let fixture = fixture();
    let donation = Donation::new(42u64, start_time(), DonationSource::Misc)
        .with_line_item(LineItem::new(99u64, "Ghost Item", 1));
    let err = export_donations(&fixture.organization, &[donation]).unwrap_err();
    match err {
        ExportError::UnknownItemColumn {
            record,
            item_id,
            item_name,
        } => {
            assert_eq!(record.get(), 42);
            assert_eq!(item_id.get(), 99);
            assert_eq!(item_name, "Ghost Item");
        }
        other => panic!("unexpected error: {other}"),
    }
}
