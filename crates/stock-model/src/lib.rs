pub mod catalog;
pub mod cell;
pub mod error;
pub mod filter;
pub mod ids;
pub mod records;
pub mod request;

pub use catalog::{Item, ItemCategory, Organization};
pub use cell::{Cell, DateStyle, MoneyStyle, cents_to_dollars};
pub use error::{ModelError, Result};
pub use filter::{FilterScope, ReportFilter};
pub use ids::{ItemCategoryId, ItemId, OrganizationId, RecordId};
pub use records::{
    DeliveryMethod, Distribution, DistributionState, Donation, DonationSource, DriveDonation,
    LineItem, ProductDrive,
};
pub use request::{DateRange, ExportRequest, ReportKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_both_keys_is_rejected() {
        let filter = ReportFilter {
            by_item_id: Some(ItemId::new(3)),
            by_item_category_id: Some(ItemCategoryId::new(9)),
        };
        let err = filter.scope().unwrap_err();
        assert_eq!(
            err,
            ModelError::ConflictingFilter {
                item: ItemId::new(3),
                category: ItemCategoryId::new(9),
            }
        );
    }

    #[test]
    fn filter_scope_resolves_single_key() {
        assert_eq!(ReportFilter::none().scope().unwrap(), None);
        assert_eq!(
            ReportFilter::by_item(4u64).scope().unwrap(),
            Some(FilterScope::Item(ItemId::new(4)))
        );
        assert_eq!(
            ReportFilter::by_category(7u64).scope().unwrap(),
            Some(FilterScope::Category(ItemCategoryId::new(7)))
        );
    }

    #[test]
    fn date_range_rejects_reversed_bounds() {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(matches!(
            DateRange::new(start, end),
            Err(ModelError::InvalidDateRange { .. })
        ));
        let range = DateRange::new(end, start).unwrap();
        assert!(range.contains(start));
        assert!(range.contains(end));
    }

    #[test]
    fn date_range_deserialization_checks_bounds() {
        let err = serde_json::from_str::<DateRange>(r#"{"start":"2024-03-31","end":"2024-03-01"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("start 2024-03-31 is after end 2024-03-01"));

        let request: ExportRequest = serde_json::from_str(
            r#"{"report":"donations","date_range":{"start":"2024-03-01","end":"2024-03-31"}}"#,
        )
        .unwrap();
        let range = request.date_range.unwrap();
        assert_eq!(range.start(), chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(range.end(), chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn request_serializes() {
        let request = ExportRequest::new(ReportKind::Distributions)
            .with_filter(ReportFilter::by_item(12u64))
            .with_record_ids(vec![RecordId::new(1), RecordId::new(2)]);
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: ExportRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
    }
}
