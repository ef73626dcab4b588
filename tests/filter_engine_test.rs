#[cfg(test)]
mod listing_filter {
    use std::collections::BTreeSet;

    use stay_scout::{
        filter::{CriteriaUpdate, FilterCriteria, ListingFilter, PriceRange},
        models::{Listing, PropertyType},
        sources::sample_listings,
    };

    fn ids(results: &[&Listing]) -> Vec<String> {
        results.iter().map(|l| l.id.clone()).collect()
    }

    fn amenities(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Checks the result is an order-preserving subset where every member matches.
    fn assert_consistent(filter: &ListingFilter) {
        let results = filter.current_results();
        let mut canonical = filter.listings().iter();
        for listing in &results {
            assert!(filter.criteria().matches(listing));
            assert!(
                canonical.any(|l| l.id == listing.id),
                "{} is out of order or not canonical",
                listing.id
            );
        }
        let expected = filter
            .listings()
            .iter()
            .filter(|l| filter.criteria().matches(l))
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn min_rating_keeps_top_rated() {
        let mut filter = ListingFilter::new(sample_listings());
        let results = filter.set_min_rating(4.8);
        assert_eq!(
            ids(&results),
            vec![
                "malibu-oceanfront-villa",
                "aspen-mountain-cabin",
                "scottsdale-desert-oasis"
            ]
        );
        assert_consistent(&filter);
    }

    #[test]
    fn price_range_alone() {
        let mut filter = ListingFilter::new(sample_listings());
        let results = filter.set_price_range(PriceRange::new(200.0, 400.0));
        assert_eq!(
            ids(&results),
            vec![
                "aspen-mountain-cabin",
                "miami-beachfront-apartment",
                "scottsdale-desert-oasis"
            ]
        );
        assert_consistent(&filter);
    }

    #[test]
    fn price_range_narrows_on_top_of_rating() {
        let mut filter = ListingFilter::new(sample_listings());
        filter.set_min_rating(4.8);
        let results = filter.set_price_range(PriceRange::new(200.0, 400.0));
        assert_eq!(
            ids(&results),
            vec!["aspen-mountain-cabin", "scottsdale-desert-oasis"]
        );
    }

    #[test]
    fn query_matches_title_or_location_once() {
        let mut filter = ListingFilter::new(sample_listings());
        let results = filter.set_query("beach");
        assert_eq!(ids(&results), vec!["miami-beachfront-apartment"]);
    }

    #[test]
    fn amenities_use_and_semantics() {
        let mut filter = ListingFilter::new(sample_listings());
        let results = filter.set_required_amenities(amenities(&["Pool", "Hot Tub"]));
        assert_eq!(ids(&results), vec!["malibu-oceanfront-villa"]);

        let results = filter.set_required_amenities(amenities(&["Pool", "Fireplace"]));
        assert!(results.is_empty());
    }

    #[test]
    fn location_filter_is_case_insensitive() {
        let mut filter = ListingFilter::new(sample_listings());
        let results = filter.set_location("new YORK");
        assert_eq!(ids(&results), vec!["nyc-downtown-loft"]);
    }

    #[test]
    fn property_type_with_no_matches_is_empty() {
        let mut filter = ListingFilter::new(sample_listings());
        assert!(filter
            .set_property_type(Some(PropertyType::PrivateRoom))
            .is_empty());
        assert_eq!(filter.set_property_type(None).len(), 6);
    }

    #[test]
    fn inverted_price_range_is_empty_not_an_error() {
        let mut filter = ListingFilter::new(sample_listings());
        assert!(filter
            .set_price_range(PriceRange::new(400.0, 200.0))
            .is_empty());
    }

    #[test]
    fn reset_restores_full_set_in_order() {
        let listings = sample_listings();
        let mut filter = ListingFilter::new(listings.clone());
        filter.set_query("loft");
        filter.set_min_rating(4.9);
        filter.set_required_amenities(amenities(&["Gym"]));
        assert!(filter.current_results().is_empty());

        let results = filter.reset();
        let expected: Vec<&Listing> = listings.iter().collect();
        assert_eq!(ids(&results), ids(&expected));
        assert!(filter.criteria().is_unconstrained());
    }

    #[test]
    fn reset_admits_prices_above_any_slider() {
        let mut listings = sample_listings();
        listings[0].price = 25_000;
        let mut filter = ListingFilter::new(listings);
        assert_eq!(filter.reset().len(), 6);
    }

    #[test]
    fn setting_same_value_twice_is_idempotent() {
        let mut filter = ListingFilter::new(sample_listings());
        let once = ids(&filter.set_query("Loft"));
        let twice = ids(&filter.set_query("Loft"));
        assert_eq!(once, twice);
    }

    #[test]
    fn field_updates_commute() {
        let updates = [
            CriteriaUpdate::Query("Loft".to_string()),
            CriteriaUpdate::MinRating(4.5),
        ];

        let mut forward = ListingFilter::new(sample_listings());
        for update in updates.iter().cloned() {
            forward.set_field(update);
        }

        let mut backward = ListingFilter::new(sample_listings());
        for update in updates.iter().rev().cloned() {
            backward.set_field(update);
        }

        assert_eq!(forward.criteria(), backward.criteria());
        assert_eq!(
            ids(&forward.current_results()),
            ids(&backward.current_results())
        );
        assert_eq!(ids(&forward.current_results()), vec!["nyc-downtown-loft"]);
    }

    #[test]
    fn current_results_has_no_side_effects() {
        let mut filter = ListingFilter::new(sample_listings());
        filter.set_location("a");
        let criteria: FilterCriteria = filter.criteria().clone();
        let first = ids(&filter.current_results());
        let second = ids(&filter.current_results());
        assert_eq!(first, second);
        assert_eq!(filter.criteria(), &criteria);
    }

    #[test]
    fn every_combination_stays_consistent() {
        let queries = ["", "a", "Loft", "beach", "zzz"];
        let ratings = [0.0, 4.6, 4.9, 6.0];
        let ranges = [
            PriceRange::default(),
            PriceRange::new(190.0, 330.0),
            PriceRange::new(500.0, 100.0),
        ];
        let amenity_sets = [amenities(&[]), amenities(&["wifi"]), amenities(&["Pool", "Gym"])];

        let mut filter = ListingFilter::new(sample_listings());
        for query in queries {
            filter.set_query(query);
            for rating in ratings {
                filter.set_min_rating(rating);
                for range in ranges {
                    filter.set_price_range(range);
                    for set in &amenity_sets {
                        filter.set_required_amenities(set.clone());
                        assert_consistent(&filter);
                    }
                }
            }
        }
    }
}
