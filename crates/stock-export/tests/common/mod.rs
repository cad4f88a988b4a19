//! Shared fixtures for export tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use stock_model::{
    Distribution, Donation, DonationSource, Item, ItemCategory, LineItem, Organization,
};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 15, 30, 0).unwrap()
}

pub fn line(item: &Item, quantity: u32) -> LineItem {
    let line = LineItem::new(item.id, item.name.clone(), quantity)
        .with_value_cents(i64::from(quantity) * 100);
    match item.category_id {
        Some(category) => line.with_category(category),
        None => line,
    }
}

/// Organization with a duplicated item, a second item, and three singles.
pub struct Fixture {
    pub organization: Organization,
    pub items: Vec<Item>,
}

pub fn fixture() -> Fixture {
    let items = vec![
        Item::new(1u64, "Dupe Item").with_category(10u64),
        Item::new(2u64, "Baby Wipes"),
        Item::new(3u64, "item_0"),
        Item::new(4u64, "item_1"),
        Item::new(5u64, "item_2"),
    ];
    let organization = items.iter().cloned().fold(
        Organization::new(1u64, "Diaper Bank").with_category(ItemCategory::new(10u64, "Test Category")),
        Organization::with_item,
    );
    Fixture {
        organization,
        items,
    }
}

impl Fixture {
    pub fn add_item(&mut self, item: Item) {
        self.organization.items.push(item.clone());
        self.items.push(item);
    }

    /// (item index, quantity) lists, one per parent record.
    pub fn item_lists(&self) -> Vec<Vec<(usize, u32)>> {
        vec![
            vec![(0, 5), (1, 7), (0, 3)],
            vec![(2, 1)],
            vec![(3, 2)],
            vec![(4, 3)],
        ]
    }

    pub fn donations(&self) -> Vec<Donation> {
        self.item_lists()
            .into_iter()
            .enumerate()
            .map(|(i, lines)| {
                let mut donation = Donation::new(
                    i as u64 + 1,
                    start_time() + Duration::days(i as i64),
                    DonationSource::DonationSite,
                );
                donation.donation_site_name = Some(format!("Space Needle {i}"));
                donation.comment = Some(format!("This is the {i}-th donation in the test."));
                donation.storage_location_name = Some("Main".to_string());
                for (index, quantity) in lines {
                    donation = donation.with_line_item(line(&self.items[index], quantity));
                }
                donation
            })
            .collect()
    }

    pub fn distributions(&self) -> Vec<Distribution> {
        self.item_lists()
            .into_iter()
            .enumerate()
            .map(|(i, lines)| {
                let mut distribution = Distribution::new(
                    i as u64 + 1,
                    start_time() - Duration::days(i as i64),
                    format!("Partner {i}"),
                    "Main Warehouse",
                );
                distribution.created_at = start_time();
                distribution.delivery_method = stock_model::DeliveryMethod::Shipped;
                distribution.shipping_cost_cents = 1209;
                for (index, quantity) in lines {
                    distribution = distribution.with_line_item(line(&self.items[index], quantity));
                }
                distribution
            })
            .collect()
    }
}

/// Integer values of the trailing `count` cells of `row`.
pub fn tail_integers(row: &[stock_model::Cell], count: usize) -> Vec<i64> {
    row[row.len() - count..]
        .iter()
        .map(|cell| cell.as_integer().expect("integer cell"))
        .collect()
}
