//! Integration tests browsing the showroom fixture through the catalog.

use testresult::TestResult;

use forecourt::prelude::*;

fn showroom() -> Result<Vec<Car>, FixtureError> {
    Ok(Fixture::from_set("showroom")?.into_cars())
}

#[test]
fn default_catalog_pages_twenty_listed_cars() -> TestResult {
    let cars = showroom()?;

    let first = browse(&cars, &CatalogQuery::default(), 1, 9);
    let last = browse(&cars, &CatalogQuery::default(), 3, 9);

    assert_eq!(first.total, 20);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.items.len(), 9);
    assert_eq!(last.items.len(), 2);

    Ok(())
}

#[test]
fn hidden_cars_only_appear_in_their_views() -> TestResult {
    let cars = showroom()?;

    let listed = browse(&cars, &CatalogQuery::default(), 1, 36);
    let listed_ids: Vec<&str> = listed.items.iter().map(|car| car.id.as_str()).collect();

    for hidden in ["gr-yaris", "chaser", "silvia-s15", "cube"] {
        assert!(!listed_ids.contains(&hidden), "{hidden} should not be listed");
    }

    let upcoming: Vec<&str> = coming_soon(&cars).iter().map(|car| car.id.as_str()).collect();
    let gone: Vec<&str> = sold(&cars).iter().map(|car| car.id.as_str()).collect();

    assert_eq!(upcoming, vec!["chaser", "gr-yaris"]);
    assert_eq!(gone, vec!["silvia-s15"]);

    Ok(())
}

#[test]
fn facet_filters_combine_with_sorting() -> TestResult {
    let cars = showroom()?;
    let query = CatalogQuery {
        category: Facet::parse("mpv"),
        sort: SortOrder::SeatsDesc,
        ..CatalogQuery::default()
    };

    let page = browse(&cars, &query, 1, 9);
    let seats: Vec<u32> = page.items.iter().map(|car| car.details.seats).collect();

    assert_eq!(seats, vec![8, 8, 7]);
    assert_eq!(
        page.items.first().map(|car| car.id.as_str()),
        Some("elgrand")
    );

    Ok(())
}

#[test]
fn year_sort_places_undated_cars_last() -> TestResult {
    let cars = showroom()?;
    let query = CatalogQuery {
        category: Facet::parse("Wagon"),
        sort: SortOrder::YearDesc,
        ..CatalogQuery::default()
    };

    let ids: Vec<&str> = browse(&cars, &query, 1, 9)
        .items
        .iter()
        .map(|car| car.id.as_str())
        .collect();

    assert_eq!(ids, vec!["stagea", "levorg"]);

    Ok(())
}

#[test]
fn catalog_state_walks_pages_and_resets_on_filter() -> TestResult {
    let cars = showroom()?;
    let mut state = CatalogState::default();

    state.go_to(3);

    assert_eq!(state.apply(&cars).items.len(), 2);

    state.set_search("toyota");

    let page = state.apply(&cars);

    assert_eq!(state.page(), 1);
    assert!(page.items.iter().all(|car| car.name().contains("Toyota")));

    Ok(())
}

#[test]
fn facet_options_cover_listed_cars_only() -> TestResult {
    let cars = showroom()?;

    let options = FacetOptions::from_cars(&cars);

    assert_eq!(
        options.categories,
        vec!["Convertible", "MPV", "SUV", "Sedan", "Sports", "Wagon"]
    );
    assert_eq!(options.transmissions, vec!["Automatic", "Manual"]);
    assert_eq!(options.seats, vec!["2", "4", "5", "7", "8"]);

    Ok(())
}
