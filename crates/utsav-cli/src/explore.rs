//! Catalog browsing commands.
//!
//! `explore` fetches one tab's items plus the vendor list and ratings map,
//! runs the core pipeline, and prints the ordered subset. Rating fetch
//! failures degrade to "unrated" and never abort the run.

use std::collections::HashMap;

use clap::ValueEnum;

use utsav_api::{fetch_ratings_map, MarketClient};
use utsav_core::{
    business_distance_km, format_inr, parse_price_range, run_query,
    sort_businesses_by_distance, AppConfig, BudgetBand, BudgetFilter, CatalogQuery, Category,
    Coordinate, ItemKind, LocationFilter, SortOrder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
    Themes,
    Inventory,
    Plates,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Themes => Category::Themes,
            CategoryArg::Inventory => Category::Inventory,
            CategoryArg::Plates => Category::Plates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    Default,
    PriceLow,
    PriceHigh,
    RatingHigh,
    RatingLow,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Default => SortOrder::Default,
            SortArg::PriceLow => SortOrder::PriceLowToHigh,
            SortArg::PriceHigh => SortOrder::PriceHighToLow,
            SortArg::RatingHigh => SortOrder::RatingHighToLow,
            SortArg::RatingLow => SortOrder::RatingLowToHigh,
        }
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ExploreArgs {
    /// Catalog tab to browse.
    #[arg(long, value_enum, default_value_t = CategoryArg::Themes)]
    pub category: CategoryArg,
    /// "all", a band (under-10k, 10k-25k, 25k-50k, 50k-1l, above-1l), or a
    /// custom "min-max" window in rupees.
    #[arg(long, default_value = "all")]
    pub budget: String,
    /// Restrict to vendors within 5 km of the viewer.
    #[arg(long, conflicts_with = "radius")]
    pub nearby: bool,
    /// Restrict to vendors within this many kilometres of the viewer.
    #[arg(long)]
    pub radius: Option<f64>,
    #[arg(long, value_enum, default_value_t = SortArg::Default)]
    pub sort: SortArg,
    /// Override the configured viewer latitude (requires --lon).
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,
    /// Override the configured viewer longitude (requires --lat).
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

/// Resolves the budget argument into a filter.
fn parse_budget(raw: &str) -> anyhow::Result<BudgetFilter> {
    match raw {
        "all" => Ok(BudgetFilter::All),
        "under-10k" => Ok(BudgetFilter::Band(BudgetBand::Under10K)),
        "10k-25k" => Ok(BudgetFilter::Band(BudgetBand::From10KTo25K)),
        "25k-50k" => Ok(BudgetFilter::Band(BudgetBand::From25KTo50K)),
        "50k-1l" => Ok(BudgetFilter::Band(BudgetBand::From50KTo1L)),
        "above-1l" => Ok(BudgetFilter::Band(BudgetBand::Above1L)),
        other => parse_price_range(other)
            .map(|r| BudgetFilter::Custom {
                min: r.min,
                max: r.max,
            })
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unrecognized budget '{other}'; use 'all', a band name, or 'min-max'"
                )
            }),
    }
}

fn location_filter(args: &ExploreArgs) -> LocationFilter {
    if let Some(radius_km) = args.radius {
        LocationFilter::Custom { radius_km }
    } else if args.nearby {
        LocationFilter::Nearby
    } else {
        LocationFilter::All
    }
}

fn resolve_viewer(args: &ExploreArgs, config: &AppConfig) -> Option<Coordinate> {
    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate { lat, lon }),
        _ => config.viewer,
    }
}

/// Runs the explore pipeline for the selected tab and prints the results.
pub(crate) async fn run_explore(
    client: &MarketClient,
    config: &AppConfig,
    args: &ExploreArgs,
) -> anyhow::Result<()> {
    let viewer = resolve_viewer(args, config);
    let location = location_filter(args);
    if location.radius_km().is_some() && viewer.is_none() {
        tracing::warn!("location filter requested but no viewer position is set; showing all");
    }

    let query = CatalogQuery {
        category: args.category.into(),
        budget: parse_budget(&args.budget)?,
        location,
        sort: args.sort.into(),
        viewer,
    };

    let businesses = client.list_businesses().await?;
    let vendor_names: HashMap<i64, &str> = businesses
        .iter()
        .map(|b| (b.id, b.name.as_str()))
        .collect();

    match args.category {
        CategoryArg::Themes => {
            let items = client.list_themes(None).await?;
            let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
            let ratings = fetch_ratings_map(client, ItemKind::Theme, &ids).await;
            let results = run_query(&items, &businesses, &ratings, &query);
            println!("{} themes", results.len());
            for theme in results {
                println!(
                    "{:<32} {:<24} {:<22} {}",
                    theme.name,
                    vendor_names.get(&theme.business_id).unwrap_or(&"?"),
                    theme.price_range.as_deref().unwrap_or("-"),
                    rating_display(&ratings, theme.id),
                );
            }
        }
        CategoryArg::Inventory => {
            let items = client.list_inventory(None).await?;
            let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
            let ratings = fetch_ratings_map(client, ItemKind::Inventory, &ids).await;
            let results = run_query(&items, &businesses, &ratings, &query);
            println!("{} inventory items", results.len());
            for item in results {
                println!(
                    "{:<32} {:<24} {:<12} x{:<5} {}",
                    item.name,
                    vendor_names.get(&item.business_id).unwrap_or(&"?"),
                    format_inr(item.price),
                    item.quantity,
                    rating_display(&ratings, item.id),
                );
            }
        }
        CategoryArg::Plates => {
            let items = client.list_plates(None).await?;
            let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
            let ratings = fetch_ratings_map(client, ItemKind::Plate, &ids).await;
            let results = run_query(&items, &businesses, &ratings, &query);
            println!("{} plates", results.len());
            for plate in results {
                println!(
                    "{:<32} {:<24} {:<12} {}",
                    plate.name,
                    vendor_names.get(&plate.business_id).unwrap_or(&"?"),
                    format_inr(plate.price),
                    rating_display(&ratings, plate.id),
                );
            }
        }
    }

    Ok(())
}

/// Lists vendors, nearest first when the viewer position is known.
/// Vendors without coordinates are listed last, not dropped.
pub(crate) async fn run_businesses(
    client: &MarketClient,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut businesses = client.list_businesses().await?;
    if let Some(viewer) = config.viewer {
        sort_businesses_by_distance(&mut businesses, viewer);
    }

    println!("{} vendors", businesses.len());
    for business in &businesses {
        let distance = config
            .viewer
            .and_then(|v| business_distance_km(business, v))
            .map_or_else(|| "-".to_owned(), |d| format!("{d:.1} km"));
        println!(
            "{:<32} {:<24} {}",
            business.name, business.category, distance
        );
    }

    Ok(())
}

fn rating_display(ratings: &HashMap<i64, f64>, id: i64) -> String {
    ratings
        .get(&id)
        .map_or_else(|| "unrated".to_owned(), |r| format!("{r:.1}/5"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_all() {
        assert_eq!(parse_budget("all").unwrap(), BudgetFilter::All);
    }

    #[test]
    fn budget_band_names() {
        assert_eq!(
            parse_budget("10k-25k").unwrap(),
            BudgetFilter::Band(BudgetBand::From10KTo25K)
        );
        assert_eq!(
            parse_budget("above-1l").unwrap(),
            BudgetFilter::Band(BudgetBand::Above1L)
        );
    }

    #[test]
    fn budget_custom_window() {
        assert_eq!(
            parse_budget("5000-25000").unwrap(),
            BudgetFilter::Custom {
                min: 5000.0,
                max: 25000.0
            }
        );
    }

    #[test]
    fn budget_garbage_is_rejected() {
        assert!(parse_budget("cheap").is_err());
    }
}
