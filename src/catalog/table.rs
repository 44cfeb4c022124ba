//! Terminal rendering of catalog pages.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

use crate::{cars::Car, catalog::Page};

/// Write a page of cars as a table followed by a page summary.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_page(mut out: impl io::Write, page: &Page<&Car>) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Name", "Slug", "Category", "Transmission", "Seats", "Year", "Status"]);

    for car in &page.items {
        builder.push_record([
            car.name().to_string(),
            car.slug.clone(),
            car.details.category.clone(),
            car.details.transmission.clone(),
            car.details.seats.to_string(),
            car.details.year.map(|year| year.to_string()).unwrap_or_default(),
            status_label(car).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(4..6), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "Page {} of {} ({} cars)",
        page.page, page.page_count, page.total
    )
}

fn status_label(car: &Car) -> &'static str {
    if !car.is_published() {
        "draft"
    } else if car.is_sold() {
        "sold"
    } else if car.is_coming_soon() {
        "coming soon"
    } else {
        "listed"
    }
}
